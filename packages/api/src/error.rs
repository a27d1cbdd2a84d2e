//! Error taxonomy for backend calls.

use thiserror::Error;

/// Failure of an [`ApiClient`](crate::ApiClient) call.
///
/// `Rejected` carries the server's own `msg` and displays as exactly that
/// string; the other variants have no user-facing message of their own,
/// so views fall back to a generic one.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server refused the request and said why.
    #[error("{msg}")]
    Rejected { status: u16, msg: String },
    /// Non-2xx response without a usable `msg` in the body.
    #[error("server returned status {status}")]
    Status { status: u16 },
    /// The request never produced a response (connectivity, DNS, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Human-readable message supplied by the server, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { msg, .. } => Some(msg),
            _ => None,
        }
    }
}
