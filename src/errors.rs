//! Unified application error type.
//! Engine, API client, config and CLI all return AppError so that the
//! error handling stays consistent from the calculator up to main().

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
    // Parsing errors (engine)
    // ---------------------------
    #[error("Malformed duration: '{0}' (expected HH:MM)")]
    MalformedDuration(String),

    #[error("Malformed date key: '{0}' (expected dd-mm-yyyy or dd-mm-yy)")]
    MalformedDateKey(String),

    #[error("Duration out of range: {0}")]
    DurationOverflow(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid reference time: {0} (expected YYYY-MM-DD HH:MM)")]
    InvalidNow(String),

    // ---------------------------
    // Badge API
    // ---------------------------
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Not configured yet. Run: quelio setup")]
    NotConfigured,

    #[error("Password not available: {0}")]
    Credentials(String),

    #[error("Keychain error: {0}")]
    Keychain(#[from] keyring::Error),
}

impl AppError {
    /// Process exit code: 2 for failures reaching the badge service, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Http(_) | AppError::Api(_) => 2,
            _ => 1,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
