//! Orchestrator configuration.
//!
//! Configuration is explicit and injected at construction; nothing in the
//! library reads the process environment except [`GeneratorConfig::from_env`],
//! so tests can supply stub credentials and point the client at a local
//! stub server.

use std::time::Duration;

use url::Url;

use crate::error::GenerateError;

/// Default provider API root.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1";

/// Default generation model.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Configuration for the contract generation orchestrator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Provider API root; the model endpoint is derived from it.
    pub base_url: Url,

    /// API key sent with every generation request.
    pub api_key: String,

    /// Model identifier, recorded in every result's metadata.
    pub model: String,

    /// Per-attempt request timeout.
    pub timeout: Duration,

    /// Total attempts for one generation call, including the first.
    pub max_attempts: u32,

    /// Backoff delay before the first retry.
    pub backoff_floor: Duration,

    /// Ceiling on the doubled backoff delay.
    pub backoff_cap: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_BASE).expect("valid default URL"),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(30),
            max_attempts: 3,
            backoff_floor: Duration::from_secs(4),
            backoff_cap: Duration::from_secs(10),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from environment variables.
    ///
    /// `GOOGLE_API_KEY` is required; its absence is a startup-fatal
    /// condition, not a per-call error. `GEMINI_API_BASE`, `GEMINI_MODEL`,
    /// and `GEMINI_TIMEOUT_SECS` override the defaults when set.
    pub fn from_env() -> Result<Self, GenerateError> {
        let api_key = std::env::var("GOOGLE_API_KEY").map_err(|_| {
            GenerateError::Configuration(
                "GOOGLE_API_KEY not found in environment variables".to_string(),
            )
        })?;

        let base_url = match std::env::var("GEMINI_API_BASE") {
            Ok(raw) => Url::parse(&raw)
                .map_err(|e| GenerateError::Configuration(format!("GEMINI_API_BASE: {e}")))?,
            Err(_) => Url::parse(DEFAULT_API_BASE).expect("valid default URL"),
        };

        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let timeout_secs = std::env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            base_url,
            api_key,
            model,
            timeout: Duration::from_secs(timeout_secs),
            ..Default::default()
        })
    }
}
