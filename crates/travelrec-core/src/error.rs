// crates/travelrec-core/src/error.rs
use thiserror::Error;

/// Errors produced while acquiring or decoding a recommendation document.
///
/// Only [`TravelError::Network`] and [`TravelError::Parse`] can happen in the
/// browser; the remaining variants come from the file and HTTP loaders used by
/// the CLI.
#[derive(Debug, Error)]
pub enum TravelError {
    /// The server answered with a non-success status.
    #[error("Network response was not ok: HTTP {status} for {url}")]
    Network { status: u16, url: String },

    /// The body was not valid JSON.
    #[error("Failed to parse recommendation data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The request never produced a response (DNS, TLS, connection reset...).
    #[error("HTTP transport error: {0}")]
    Http(String),

    /// A browser binding call failed.
    #[error("DOM error: {0}")]
    Dom(String),
}

impl TravelError {
    /// `true` for the two failure kinds the page loader recognizes.
    pub fn is_load_failure(&self) -> bool {
        matches!(self, TravelError::Network { .. } | TravelError::Parse(_))
    }
}

pub type Result<T> = std::result::Result<T, TravelError>;
