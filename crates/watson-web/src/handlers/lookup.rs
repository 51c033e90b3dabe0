//! Name lookup links.

use axum::{extract::Query, Json};
use serde::Deserialize;

use watson_common::ApiError;
use watson_lookup::{build_lookup, LookupLinks};

#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    #[serde(default)]
    pub name: String,
}

/// GET /api/lookup?name=John+Smith
pub async fn lookup_name(Query(query): Query<LookupQuery>) -> Result<Json<LookupLinks>, ApiError> {
    Ok(Json(build_lookup(&query.name)?))
}
