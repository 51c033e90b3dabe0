//! Search records kept in memory for the lifetime of the process.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use uuid::Uuid;

/// Identifier of one search, e.g. `search_20240131_142501_9f1c2ab0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchId(String);

impl SearchId {
    /// Timestamped id with a random suffix so two searches started in the
    /// same second never share a results folder.
    pub fn generate() -> Self {
        Self::generate_at(Utc::now())
    }

    pub fn generate_at(now: DateTime<Utc>) -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        Self(format!("search_{}_{}", now.format("%Y%m%d_%H%M%S"), &suffix[..8]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SearchId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SearchId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for SearchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStatus {
    Running,
    Completed,
    Error,
    Timeout,
}

impl SearchStatus {
    pub fn is_finished(self) -> bool {
        !matches!(self, SearchStatus::Running)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SearchStatus::Running   => "running",
            SearchStatus::Completed => "completed",
            SearchStatus::Error     => "error",
            SearchStatus::Timeout   => "timeout",
        }
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One search and everything captured from its process so far.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRecord {
    pub id: SearchId,
    pub status: SearchStatus,
    pub usernames: Vec<String>,
    /// Captured stdout, one `\n`-terminated line per line read.
    #[serde(default)]
    pub output: String,
    /// Launch failure text, or captured stderr once the process exited.
    pub error: Option<String>,
    pub exit_code: Option<i32>,
    pub folder: PathBuf,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl SearchRecord {
    pub fn new(id: SearchId, usernames: Vec<String>, folder: PathBuf) -> Self {
        Self {
            id,
            status: SearchStatus::Running,
            usernames,
            output: String::new(),
            error: None,
            exit_code: None,
            folder,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    pub fn push_line(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }

    pub fn finish(&mut self, status: SearchStatus, error: Option<String>, exit_code: Option<i32>) {
        self.status = status;
        self.error = error.filter(|e| !e.trim().is_empty());
        self.exit_code = exit_code;
        self.finished_at = Some(Utc::now());
    }
}

/// Events pushed to connected clients via SSE.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchEvent {
    /// A search was accepted and its process is being launched
    Started { search_id: SearchId, usernames: Vec<String> },
    /// One line of tool output
    Output { search_id: SearchId, line: String },
    /// The search reached a terminal status
    Finished { search_id: SearchId, status: SearchStatus },
}
