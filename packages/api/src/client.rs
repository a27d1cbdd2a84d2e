//! HTTP client bound to one backend origin.

use std::sync::OnceLock;

use serde::Serialize;

use crate::error::ApiError;
use crate::models::{ErrorBody, LoginPayload, RegistrationPayload};
use crate::settings::Settings;

/// Client for the forum backend.
///
/// Holds a [`reqwest::Client`] plus the origin every path is resolved
/// against, so call sites only name endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    origin: String,
}

static SHARED: OnceLock<ApiClient> = OnceLock::new();

/// Process-wide client bound to the configured origin (lazy singleton).
pub fn shared() -> &'static ApiClient {
    SHARED.get_or_init(|| ApiClient::new(Settings::load().api.origin))
}

impl ApiClient {
    pub fn new(origin: impl Into<String>) -> Self {
        let mut origin = origin.into();
        while origin.ends_with('/') {
            origin.pop();
        }
        Self {
            http: reqwest::Client::new(),
            origin,
        }
    }

    /// Create a new account.
    ///
    /// A 2xx response is a success and its body is ignored. On any other
    /// response the body's `msg` field, when present, becomes the error's
    /// user-visible message.
    pub async fn register(&self, payload: &RegistrationPayload) -> Result<(), ApiError> {
        self.post("/users/register", payload).await
    }

    /// Sign in to an existing account. Same status and `msg` contract as
    /// [`ApiClient::register`].
    pub async fn login(&self, payload: &LoginPayload) -> Result<(), ApiError> {
        self.post("/users/login", payload).await
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = format!("{}{}", self.origin, path);
        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        tracing::debug!(%status, url, "request rejected by server");
        match response.json::<ErrorBody>().await {
            Ok(ErrorBody { msg: Some(msg) }) => Err(ApiError::Rejected {
                status: status.as_u16(),
                msg,
            }),
            // Missing `msg`, non-JSON body, or a read failure: the caller
            // only gets the status to report.
            _ => Err(ApiError::Status {
                status: status.as_u16(),
            }),
        }
    }
}
