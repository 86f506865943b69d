//! Application-wide error types.
//!
//! Handlers and the poll loop log these and carry on; only `main` turns them
//! into a process exit.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexerError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// A `getEvents` response that could not be turned into campaign events.
    #[error("Event parse error: {0}")]
    EventParse(String),

    /// The persisted resume point is not a usable ledger sequence.
    #[error("Cursor error: stored ledger {0} is outside the ledger sequence range")]
    Cursor(i64),
}

pub type Result<T> = std::result::Result<T, IndexerError>;
