//! In-memory status board of every search started by this process.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use watson_common::{SearchId, SearchRecord, SearchStatus};

#[derive(Debug, Clone, Default)]
pub struct SearchRegistry {
    inner: Arc<RwLock<HashMap<SearchId, SearchRecord>>>,
}

impl SearchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, record: SearchRecord) {
        self.inner.write().await.insert(record.id.clone(), record);
    }

    /// Snapshot of one record.
    pub async fn get(&self, id: &SearchId) -> Option<SearchRecord> {
        self.inner.read().await.get(id).cloned()
    }

    pub async fn append_output(&self, id: &SearchId, line: &str) {
        if let Some(record) = self.inner.write().await.get_mut(id) {
            record.push_line(line);
        }
    }

    pub async fn finish(
        &self,
        id: &SearchId,
        status: SearchStatus,
        error: Option<String>,
        exit_code: Option<i32>,
    ) {
        if let Some(record) = self.inner.write().await.get_mut(id) {
            record.finish(status, error, exit_code);
        }
    }

    /// All records, newest first.
    pub async fn list(&self) -> Vec<SearchRecord> {
        let mut records: Vec<SearchRecord> = self.inner.read().await.values().cloned().collect();
        records.sort_by(|a, b| b.started_at.cmp(&a.started_at).then_with(|| b.id.cmp(&a.id)));
        records
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record(id: &str) -> SearchRecord {
        SearchRecord::new(id.into(), vec!["alice".into()], PathBuf::from("results").join(id))
    }

    #[tokio::test]
    async fn test_lifecycle() {
        let registry = SearchRegistry::new();
        let id = SearchId::from("search_1");
        registry.insert(record("search_1")).await;

        registry.append_output(&id, "[+] GitHub: https://github.com/alice").await;
        registry.finish(&id, SearchStatus::Completed, None, Some(0)).await;

        let snapshot = registry.get(&id).await.unwrap();
        assert_eq!(snapshot.status, SearchStatus::Completed);
        assert_eq!(snapshot.output, "[+] GitHub: https://github.com/alice\n");
        assert_eq!(snapshot.exit_code, Some(0));
    }

    #[tokio::test]
    async fn test_unknown_id_is_ignored() {
        let registry = SearchRegistry::new();
        let id = SearchId::from("missing");
        registry.append_output(&id, "line").await;
        registry.finish(&id, SearchStatus::Error, Some("boom".into()), None).await;
        assert!(registry.get(&id).await.is_none());
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let registry = SearchRegistry::new();
        let mut older = record("search_a");
        older.started_at -= chrono::Duration::seconds(10);
        registry.insert(older).await;
        registry.insert(record("search_b")).await;

        let ids: Vec<String> = registry.list().await.into_iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["search_b", "search_a"]);
    }
}
