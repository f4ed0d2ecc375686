//! Runtime settings, assembled from an optional `careerfinder.toml` next to
//! the binary and `CAREERFINDER_*` environment overrides. Secrets may also
//! arrive embedded at build time (see build.rs) or through `.env`.

use std::path::PathBuf;

use log::warn;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// API key for the analysis collaborator.
    #[serde(default)]
    pub gemini_api_key: Option<String>,
    /// Google Analytics measurement id; analytics stays off without one.
    #[serde(default)]
    pub ga_measurement_id: Option<String>,
    /// Override for the key-value store location.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Settings {
    pub fn load() -> Self {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("careerfinder").required(false))
            .add_source(config::Environment::with_prefix("CAREERFINDER"));

        match builder.build().and_then(|c| c.try_deserialize()) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load settings ({}), using defaults", e);
                Settings::default()
            }
        }
    }

    /// The effective Gemini key: explicit setting, then build-time embedded,
    /// then runtime environment.
    pub fn gemini_api_key(&self) -> Option<String> {
        self.gemini_api_key
            .clone()
            .or_else(|| option_env!("GEMINI_API_KEY").map(str::to_string))
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .filter(|key| !key.is_empty())
    }

    /// The effective measurement id: explicit setting, then build-time
    /// embedded, then runtime environment.
    pub fn ga_measurement_id(&self) -> Option<String> {
        self.ga_measurement_id
            .clone()
            .or_else(|| option_env!("GA_MEASUREMENT_ID").map(str::to_string))
            .or_else(|| std::env::var("GA_MEASUREMENT_ID").ok())
            .filter(|id| !id.is_empty())
    }
}
