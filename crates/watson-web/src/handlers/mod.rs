//! HTTP handlers for all web routes.

use axum::extract::FromRequest;
use watson_common::ApiError;

pub mod index;
pub mod search;
pub mod files;
pub mod lookup;

/// `Json` whose rejections come back as `{"error": ...}` like every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
