//! Wire-level bodies exchanged with the backend.

use serde::{Deserialize, Serialize};

/// Body of `POST /users/register`.
///
/// Field names follow the backend's contract (`firstname`/`lastname`
/// without separators), not Rust naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationPayload {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub password: String,
    pub email: String,
}

/// Body of `POST /users/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Error body the backend attaches to non-2xx responses.
///
/// `msg` is what gets shown to the user; the backend is not guaranteed to
/// send it, so it stays optional here and callers decide on a fallback.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub msg: Option<String>,
}
