//! Unified application error type.
//! All modules (ledger, blob, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Engine / ledger
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    /// The embedded engine could not start or the stored snapshot is unusable.
    #[error("Ledger engine failed to initialize: {0}")]
    EngineInit(String),

    /// A single append was rejected by the engine. Prior state is untouched.
    #[error("Failed to record event: {0}")]
    Insert(#[source] rusqlite::Error),

    /// The record is in memory but the snapshot could not be written.
    #[error("Snapshot not persisted after {attempts} attempt(s): {reason}")]
    Persist { attempts: u32, reason: String },

    // ---------------------------
    // Blob store
    // ---------------------------
    #[error("Blob store error: {0}")]
    Blob(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid event kind: {0}")]
    InvalidKind(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True when the failure leaves the in-memory ledger usable.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::EngineInit(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
