//! Search endpoints: start a search, poll its status, list past searches.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use watson_common::{ApiError, ParsedResults, SearchId, SearchStatus, WatsonError};
use watson_runner::{parse_output, split_usernames, SearchOptions};

use super::ApiJson;
use crate::state::SharedState;

/// Usernames arrive either as the free-text field or as a list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UsernameInput {
    Text(String),
    List(Vec<String>),
}

impl Default for UsernameInput {
    fn default() -> Self {
        UsernameInput::Text(String::new())
    }
}

impl UsernameInput {
    pub fn into_usernames(self) -> Vec<String> {
        match self {
            UsernameInput::Text(text) => split_usernames(&text),
            UsernameInput::List(list) => list.iter().flat_map(|u| split_usernames(u)).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub usernames: UsernameInput,
    /// `null` and a missing field both mean the defaults.
    #[serde(default)]
    pub options: Option<SearchOptions>,
}

#[derive(Debug, Serialize)]
pub struct SearchStarted {
    pub search_id: SearchId,
    pub message: String,
    pub usernames: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: SearchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<ParsedResults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_output: Option<String>,
    pub folder: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct SearchSummary {
    pub search_id: SearchId,
    pub status: SearchStatus,
    pub usernames: Vec<String>,
    pub found: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

/// POST /search - launch the tool in the background
pub async fn start_search(
    State(state): State<SharedState>,
    ApiJson(request): ApiJson<SearchRequest>,
) -> Result<Json<SearchStarted>, ApiError> {
    let options = request.options.unwrap_or_default();
    let usernames = request.usernames.into_usernames();
    let search_id = state.searches.start(usernames.clone(), &options).await?;

    Ok(Json(SearchStarted {
        search_id,
        message: "Search started".to_string(),
        usernames,
    }))
}

/// GET /status/{search_id} - current status, parsed even while running
pub async fn search_status(
    State(state): State<SharedState>,
    Path(search_id): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    let record = state
        .searches
        .registry()
        .get(&SearchId::from(search_id.clone()))
        .await
        .ok_or(WatsonError::SearchNotFound(search_id))?;

    let (results, raw_output) = if record.output.is_empty() {
        (None, None)
    } else {
        (Some(parse_output(&record.output)), Some(record.output))
    };

    Ok(Json(StatusResponse {
        status: record.status,
        results,
        raw_output,
        folder: record.folder.display().to_string(),
        error: record.error,
        exit_code: record.exit_code,
    }))
}

/// GET /api/searches - every search in this process, newest first
pub async fn list_searches(State(state): State<SharedState>) -> Json<Vec<SearchSummary>> {
    let summaries = state
        .searches
        .registry()
        .list()
        .await
        .into_iter()
        .map(|record| SearchSummary {
            found: parse_output(&record.output).found.len(),
            search_id: record.id,
            status: record.status,
            usernames: record.usernames,
            started_at: record.started_at,
            finished_at: record.finished_at,
        })
        .collect();
    Json(summaries)
}
