use std::sync::Arc;

use storage::progress_store::ProgressStore;
use storage::repository::Storage;

use crate::ai::{AiJudgeService, AiLessonService, CodeJudge, LessonGenerator};
use crate::arena::ArenaService;
use crate::error::AppServicesError;

/// Assembles the storage backend, the progress store, and the AI
/// collaborators behind one handle the host can build controllers from.
#[derive(Clone)]
pub struct AppServices {
    storage: Storage,
    progress_store: ProgressStore,
    lessons: Arc<dyn LessonGenerator>,
    judge: Arc<dyn CodeJudge>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage. AI collaborators are
    /// configured from the environment; unconfigured ones serve fallbacks.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::with_storage(storage))
    }

    /// Build services over in-memory storage, for tests and prototyping.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_storage(Storage::in_memory())
    }

    fn with_storage(storage: Storage) -> Self {
        let progress_store = ProgressStore::new(Arc::clone(&storage.kv));
        let lessons: Arc<dyn LessonGenerator> = Arc::new(AiLessonService::from_env());
        let judge: Arc<dyn CodeJudge> = Arc::new(AiJudgeService::from_env());
        Self {
            storage,
            progress_store,
            lessons,
            judge,
        }
    }

    /// Swap the collaborators, e.g. for stubs in tests.
    #[must_use]
    pub fn with_collaborators(
        mut self,
        lessons: Arc<dyn LessonGenerator>,
        judge: Arc<dyn CodeJudge>,
    ) -> Self {
        self.lessons = lessons;
        self.judge = judge;
        self
    }

    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    #[must_use]
    pub fn progress_store(&self) -> ProgressStore {
        self.progress_store.clone()
    }

    #[must_use]
    pub fn lessons(&self) -> Arc<dyn LessonGenerator> {
        Arc::clone(&self.lessons)
    }

    #[must_use]
    pub fn judge(&self) -> Arc<dyn CodeJudge> {
        Arc::clone(&self.judge)
    }

    /// Build an arena controller restored from persisted progress.
    pub async fn arena(&self) -> ArenaService {
        ArenaService::restore(
            self.progress_store.clone(),
            Arc::clone(&self.lessons),
            Arc::clone(&self.judge),
        )
        .await
    }
}
