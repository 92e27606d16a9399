use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the Light My Way library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Streetlight dataset could not be located at the resolved path.
    #[error("streetlight dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// Raised when variant selection is asked to rank an empty candidate list.
    #[error("no route candidates to select variants from")]
    NoCandidates,

    /// Raised when a route candidate carries values the scorer cannot use.
    #[error("invalid route candidate: {reason}")]
    InvalidCandidate { reason: String },

    /// Raised when a provider route cannot be turned into a candidate.
    #[error("directions route {route} is invalid: {reason}")]
    InvalidRoute { route: usize, reason: String },

    /// Raised when the directions provider reported a non-OK status.
    #[error("directions provider returned status {status}{}", format_message(.message))]
    ProviderStatus {
        status: String,
        message: Option<String>,
    },

    /// Wrapper for JSON parsing errors (datasets and provider responses).
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_message(message: &Option<String>) -> String {
    match message.as_deref() {
        Some(text) if !text.is_empty() => format!(": {text}"),
        _ => String::new(),
    }
}
