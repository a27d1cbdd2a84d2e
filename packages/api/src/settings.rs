//! Backend origin configuration.
//!
//! Native targets read an optional `config.toml` and the environment
//! (`API_ORIGIN=...`) over the compiled-in default. Wasm builds have no
//! filesystem or environment, so they always use the default origin.

#[cfg(not(target_arch = "wasm32"))]
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Origin of the deployed backend, used when nothing overrides it.
pub const DEFAULT_ORIGIN: &str = "https://forum-backend.onrender.com";

#[derive(Debug, Deserialize)]
pub struct Api {
    pub origin: String,
}

impl Default for Api {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.into(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct Settings {
    pub api: Api,
}

impl Settings {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("api.origin", DEFAULT_ORIGIN)?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::default().separator("_"))
            .build()?;

        config.try_deserialize()
    }

    /// Best-effort load: any configuration error falls back to defaults.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Settings::new().unwrap_or_default()
        }
        #[cfg(target_arch = "wasm32")]
        {
            Settings::default()
        }
    }
}
