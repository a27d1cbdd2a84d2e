//! # API crate — HTTP client for the forum backend
//!
//! Every frontend in the workspace talks to the backend through this crate.
//! It owns the wire contract (request and error bodies), the error taxonomy,
//! and a [`ApiClient`] bound to one configured origin so call sites only
//! ever name an endpoint path.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `reqwest`-backed client bound to the backend origin, plus the process-wide instance |
//! | [`error`] | [`ApiError`] taxonomy; the rejection variant displays the server's own message |
//! | [`models`] | Request bodies (`RegistrationPayload`, `LoginPayload`) and the error body shape |
//! | [`settings`] | Backend origin configuration (defaults, `config.toml`, environment) |

pub mod client;
pub mod error;
pub mod models;
pub mod settings;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{LoginPayload, RegistrationPayload};
