use std::sync::Arc;

use tracing::warn;

use neon_core::{Catalog, ProgressRecord};

use crate::repository::{KeyValueRepository, StorageError};

/// Well-known key the progress blob lives under.
pub const PROGRESS_KEY: &str = "neon_coder_progress";

/// Persists the single progress record as a JSON blob in the key-value store.
///
/// Loading is deliberately infallible: whatever is wrong with the persisted
/// state (absent, malformed, unreadable), the caller gets a usable record and
/// the failure is only logged. Progress data is never worth crashing over.
#[derive(Clone)]
pub struct ProgressStore {
    kv: Arc<dyn KeyValueRepository>,
}

impl ProgressStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueRepository>) -> Self {
        Self { kv }
    }

    /// Restore the persisted record, falling back to the default on absence
    /// or any failure. A loaded count is clamped to its track's catalog
    /// length so the frontier invariant holds even against stale data.
    pub async fn load(&self) -> ProgressRecord {
        let bytes = match self.kv.get(PROGRESS_KEY).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return ProgressRecord::default(),
            Err(err) => {
                warn!(error = %err, "failed to read persisted progress, starting fresh");
                return ProgressRecord::default();
            }
        };

        match serde_json::from_slice::<ProgressRecord>(&bytes) {
            Ok(record) => record.clamp_to(Catalog::for_track(record.track()).len()),
            Err(err) => {
                warn!(error = %err, "discarding malformed progress record");
                ProgressRecord::default()
            }
        }
    }

    /// Serialize and persist the record. Called after every state change.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if encoding or the backend write fails.
    pub async fn save(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(record)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.kv.put(PROGRESS_KEY, &bytes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryRepository;
    use neon_core::Track;

    fn store() -> (InMemoryRepository, ProgressStore) {
        let repo = InMemoryRepository::new();
        let store = ProgressStore::new(Arc::new(repo.clone()));
        (repo, store)
    }

    #[tokio::test]
    async fn load_defaults_when_nothing_is_persisted() {
        let (_repo, store) = store();
        assert_eq!(store.load().await, ProgressRecord::default());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let (_repo, store) = store();
        let record = ProgressRecord::new(Track::Html).advance(0).advance(1);
        store.save(&record).await.unwrap();
        assert_eq!(store.load().await, record);
    }

    #[tokio::test]
    async fn malformed_bytes_fall_back_to_default() {
        let (repo, store) = store();
        repo.put(PROGRESS_KEY, b"{not json").await.unwrap();
        assert_eq!(store.load().await, ProgressRecord::default());
    }

    #[tokio::test]
    async fn wrong_shape_falls_back_to_default() {
        let (repo, store) = store();
        repo.put(PROGRESS_KEY, br#"{"unlockedLevelIndex": "three"}"#)
            .await
            .unwrap();
        assert_eq!(store.load().await, ProgressRecord::default());
    }

    #[tokio::test]
    async fn unknown_track_name_loads_as_default_track() {
        let (repo, store) = store();
        repo.put(
            PROGRESS_KEY,
            br#"{"unlockedLevelIndex": 2, "language": "Fortran"}"#,
        )
        .await
        .unwrap();

        let record = store.load().await;
        assert_eq!(record.track(), Track::default());
        assert_eq!(record.unlocked_count(), 2);
    }

    #[tokio::test]
    async fn out_of_range_count_is_clamped_to_the_catalog() {
        let (repo, store) = store();
        repo.put(
            PROGRESS_KEY,
            br#"{"unlockedLevelIndex": 500, "language": "HTML5"}"#,
        )
        .await
        .unwrap();

        let record = store.load().await;
        assert_eq!(record.track(), Track::Html);
        assert_eq!(record.unlocked_count(), 20);
    }

    #[tokio::test]
    async fn persisted_blob_uses_the_documented_layout() {
        let (repo, store) = store();
        store
            .save(&ProgressRecord::new(Track::Python).advance(0))
            .await
            .unwrap();

        let bytes = repo.get(PROGRESS_KEY).await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "unlockedLevelIndex": 1, "language": "Python" })
        );
    }
}
