//! Shared error type across badge-overlay crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / missing required parameter.
    BadRequest,
    /// The upstream badge service could not be reached or read.
    BadGateway,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and metrics labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::BadGateway => "BAD_GATEWAY",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, OverlayError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("username is required")]
    UsernameRequired,
    #[error("upstream fetch failed: {0}")]
    Upstream(String),
    #[error("upstream answered with status {0}")]
    UpstreamStatus(u16),
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl OverlayError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            OverlayError::UsernameRequired => ClientCode::BadRequest,
            OverlayError::Upstream(_) | OverlayError::UpstreamStatus(_) => ClientCode::BadGateway,
            OverlayError::BadConfig(_) | OverlayError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Text placed in the `error` field of JSON error bodies.
    ///
    /// These strings are part of the HTTP contract and never carry internal detail.
    pub fn client_message(&self) -> &'static str {
        match self.client_code() {
            ClientCode::BadRequest => "Username is required",
            ClientCode::BadGateway => "Failed to fetch upstream",
            ClientCode::Internal => "Internal server error",
        }
    }
}
