//! Landing page with the search form, live results and name lookup.

use axum::{extract::State, response::Html};
use minijinja::context;

use watson_common::{ApiError, WatsonError};

use crate::state::SharedState;

pub async fn index_page(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    let sherlock = &state.config.sherlock;
    let html = state
        .templates
        .get_template("index.html")
        .and_then(|template| {
            template.render(context! {
                version => env!("CARGO_PKG_VERSION"),
                results_dir => sherlock.results_dir.display().to_string(),
                search_timeout_secs => sherlock.search_timeout_secs,
            })
        })
        .map_err(|e| WatsonError::Other(e.into()))?;
    Ok(Html(html))
}
