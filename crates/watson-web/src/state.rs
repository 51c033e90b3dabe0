//! Shared application state for the web server.

use minijinja::Environment;
use std::sync::Arc;
use tokio::sync::broadcast;

use watson_common::SearchEvent;
use watson_config::Config;
use watson_runner::SearchService;

/// Shared state injected into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub searches: SearchService,
    pub templates: Environment<'static>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let searches = SearchService::new(&config.sherlock);

        let mut templates = Environment::new();
        templates.add_template("index.html", include_str!("../templates/index.html"))?;

        Ok(Self { config, searches, templates })
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SearchEvent> {
        self.searches.subscribe()
    }
}

pub type SharedState = Arc<AppState>;
