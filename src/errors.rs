//! Unified application error type.
//! All modules (storage, core, sync, cli) return AppError to keep the error
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
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Storage quota exceeded: {needed} bytes requested, {quota} available")]
    QuotaExceeded { needed: usize, quota: usize },

    // ---------------------------
    // Serialization / network
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error: {0} {1}")]
    HttpStatus(u16, String),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid record type: {0}")]
    InvalidRecordType(String),

    #[error("Invalid leave type: {0}")]
    InvalidLeaveType(String),

    #[error("{0}")]
    Validation(String),

    #[error("Not logged in. Run `guruhadir login <username> <password>` first.")]
    NotAuthenticated,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

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

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Export(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Reasons a login attempt is rejected. Messages are shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("Username dan Password harus diisi.")]
    MissingCredentials,

    #[error("{0}")]
    BadCredentials(String),

    #[error("{0}")]
    MisconfiguredEndpoint(String),

    #[error("Gagal terhubung ke server: {0}")]
    Unreachable(String),

    #[error("Server Error: {0} {1}")]
    Server(u16, String),

    #[error("Gagal menyimpan sesi di perangkat: {0}")]
    LocalStorage(String),
}
