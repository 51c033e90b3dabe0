use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WatsonError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("Search not found")]
    SearchNotFound(String),

    #[error("{0}")]
    FileNotFound(String),

    #[error("Failed to launch {program}: {reason}")]
    Launch { program: String, reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, WatsonError>;

/// A body that is not valid JSON, or not the expected shape, is a bad request.
impl From<JsonRejection> for WatsonError {
    fn from(rejection: JsonRejection) -> Self {
        WatsonError::InvalidRequest(rejection.body_text())
    }
}

/// Error returned from HTTP handlers, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError(pub WatsonError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            WatsonError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            WatsonError::SearchNotFound(_) | WatsonError::FileNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl<E> From<E> for ApiError
where
    E: Into<WatsonError>,
{
    fn from(err: E) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
