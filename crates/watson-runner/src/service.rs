//! Starts searches in the background and records their progress.

use async_trait::async_trait;
use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info, warn};

use watson_common::{Result, SearchEvent, SearchId, SearchRecord, SearchStatus};
use watson_config::SherlockConfig;

use crate::command::{build_args, SearchOptions};
use crate::process::{OutputSink, RunOutcome, SherlockRunner};
use crate::registry::SearchRegistry;

pub const EVENT_CAPACITY: usize = 256;

#[derive(Debug, Clone)]
pub struct SearchService {
    registry: SearchRegistry,
    runner: Arc<SherlockRunner>,
    results_dir: PathBuf,
    no_color: bool,
    events: broadcast::Sender<SearchEvent>,
}

impl SearchService {
    pub fn new(config: &SherlockConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            registry: SearchRegistry::new(),
            runner: Arc::new(SherlockRunner::from_config(config)),
            results_dir: config.results_dir.clone(),
            no_color: config.no_color,
            events,
        }
    }

    pub fn registry(&self) -> &SearchRegistry {
        &self.registry
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SearchEvent> {
        self.events.subscribe()
    }

    /// Validate the request, create the results folder, register a
    /// `running` record and launch the tool in a background task.
    ///
    /// Returns as soon as the task is spawned.
    pub async fn start(&self, usernames: Vec<String>, options: &SearchOptions) -> Result<SearchId> {
        let id = SearchId::generate();
        let folder = self.results_dir.join(id.as_str());
        let args = build_args(&usernames, options, &folder, self.no_color)?;

        tokio::fs::create_dir_all(&folder).await?;

        info!("Starting search {} for {:?}", id, usernames);
        self.registry
            .insert(SearchRecord::new(id.clone(), usernames.clone(), folder))
            .await;
        let _ = self.events.send(SearchEvent::Started { search_id: id.clone(), usernames });

        let sink = RecordSink {
            id: id.clone(),
            registry: self.registry.clone(),
            events: self.events.clone(),
        };
        let runner = self.runner.clone();
        tokio::spawn(async move {
            run_search(runner, args, sink).await;
        });

        Ok(id)
    }
}

/// Appends each line to the record and forwards it to SSE subscribers.
struct RecordSink {
    id: SearchId,
    registry: SearchRegistry,
    events: broadcast::Sender<SearchEvent>,
}

#[async_trait]
impl OutputSink for RecordSink {
    async fn line(&self, line: &str) {
        self.registry.append_output(&self.id, line).await;
        let _ = self.events.send(SearchEvent::Output {
            search_id: self.id.clone(),
            line: line.to_string(),
        });
    }
}

async fn run_search(runner: Arc<SherlockRunner>, args: Vec<OsString>, sink: RecordSink) {
    let (status, error, exit_code) = match runner.run(&args, &sink).await {
        Ok(RunOutcome::Exited { exit_code, stderr }) => {
            info!("Search {} completed (exit code {:?})", sink.id, exit_code);
            (SearchStatus::Completed, Some(stderr), exit_code)
        }
        Ok(RunOutcome::TimedOut { stderr }) => {
            let limit = runner.timeout().map(|d| d.as_secs()).unwrap_or_default();
            warn!("Search {} timed out after {}s", sink.id, limit);
            let mut message = format!("Search timed out after {limit}s");
            if !stderr.trim().is_empty() {
                message.push('\n');
                message.push_str(&stderr);
            }
            (SearchStatus::Timeout, Some(message), None)
        }
        Err(e) => {
            error!("Search {} failed: {}", sink.id, e);
            (SearchStatus::Error, Some(e.to_string()), None)
        }
    };

    sink.registry.finish(&sink.id, status, error, exit_code).await;
    let _ = sink.events.send(SearchEvent::Finished { search_id: sink.id.clone(), status });
}
