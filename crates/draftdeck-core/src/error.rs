//! Error types for the core library.

use thiserror::Error;

/// Errors returned by the draft repository client.
///
/// Every variant renders as a single human-readable sentence; callers show
/// the `Display` output directly and never expose the underlying response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 404 on an identifier-scoped operation.
    #[error("Draft not found")]
    NotFound,

    /// Non-2xx response while loading a collection or record.
    #[error("Failed to load {0}")]
    Fetch(&'static str),

    /// Non-2xx response while writing a record or preference.
    #[error("Failed to save {0}")]
    Update(&'static str),

    /// Non-2xx response while requesting a status transition.
    #[error("Failed to {0} draft")]
    Transition(&'static str),

    /// Send failure carrying the server-provided detail verbatim.
    ///
    /// Send failures (quota, invalid recipient) are actionable, so the
    /// message text must reach the user unmodified.
    #[error("{0}")]
    Send(String),

    /// The inbound mail poll could not be triggered.
    #[error("Poll failed")]
    Poll,

    /// The sign-in URL could not be obtained.
    #[error("{0}")]
    Auth(String),

    /// The request could not be sent or completed.
    #[error("Could not reach server: {0}")]
    Network(#[from] reqwest::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, ApiError>;
