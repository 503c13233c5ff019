//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by the AI-backed collaborators before their fallback kicks
/// in. These never cross the arena boundary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AiServiceError {
    #[error("AI collaborator is not configured")]
    Disabled,
    #[error("AI collaborator returned an empty response")]
    EmptyResponse,
    #[error("AI request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("AI reply was not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors emitted by `ArenaService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ArenaError {
    #[error("no level is currently open")]
    NoActiveLevel,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
