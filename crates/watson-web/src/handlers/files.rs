//! Result files written by the tool into a search's output folder.

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::path::PathBuf;

use watson_common::{ApiError, SearchId, WatsonError};

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct FileList {
    pub files: Vec<String>,
}

async fn search_folder(state: &SharedState, search_id: String) -> Result<PathBuf, ApiError> {
    let record = state
        .searches
        .registry()
        .get(&SearchId::from(search_id.clone()))
        .await
        .ok_or(WatsonError::SearchNotFound(search_id))?;
    Ok(record.folder)
}

/// A bare file name: no separators, no `.`/`..`.
pub fn is_safe_filename(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

fn content_type(name: &str) -> &'static str {
    match name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase()).as_deref() {
        Some("csv")  => "text/csv; charset=utf-8",
        Some("txt")  => "text/plain; charset=utf-8",
        Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        _            => "application/octet-stream",
    }
}

/// GET /list_files/{search_id}
pub async fn list_files(
    State(state): State<SharedState>,
    Path(search_id): Path<String>,
) -> Result<Json<FileList>, ApiError> {
    let folder = search_folder(&state, search_id).await?;

    let mut files = Vec::new();
    let mut entries = match tokio::fs::read_dir(&folder).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Json(FileList { files })),
        Err(e) => return Err(e.into()),
    };
    while let Some(entry) = entries.next_entry().await? {
        files.push(entry.file_name().to_string_lossy().into_owned());
    }
    files.sort();

    Ok(Json(FileList { files }))
}

/// GET /download/{search_id}/{filename} - send a result file as an attachment
pub async fn download_file(
    State(state): State<SharedState>,
    Path((search_id, filename)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let folder = search_folder(&state, search_id).await?;

    if !is_safe_filename(&filename) {
        return Err(WatsonError::InvalidRequest("Invalid filename".into()).into());
    }

    let path = folder.join(&filename);
    if !tokio::fs::metadata(&path).await.map(|m| m.is_file()).unwrap_or(false) {
        return Err(WatsonError::FileNotFound("File not found".into()).into());
    }
    let bytes = tokio::fs::read(&path).await?;

    let disposition = format!("attachment; filename=\"{}\"", filename.replace('"', "_"));
    let disposition = HeaderValue::from_str(&disposition)
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(content_type(&filename))),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
