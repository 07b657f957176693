//! Process-wide Canvas credential configuration.

use std::fmt;
use std::sync::OnceLock;

use crate::error::{EaselError, Result};

/// Global config (initialized once, read-only afterwards).
static GLOBAL_CONFIG: OnceLock<CanvasConfig> = OnceLock::new();

/// Canvas connection settings: API base URL + bearer access token.
///
/// Loaded once at startup and immutable from then on. The token never
/// appears in `Debug` output or logs.
#[derive(Clone)]
pub struct CanvasConfig {
    base_url: String,
    token: String,
}

impl fmt::Debug for CanvasConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanvasConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl CanvasConfig {
    /// Create a config from explicit values, rejecting blank ones.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let token = token.into();

        if base_url.trim().is_empty() {
            return Err(EaselError::Configuration(
                "CANVAS_BASE_URL is required".to_string(),
            ));
        }
        if token.trim().is_empty() {
            return Err(EaselError::Configuration(
                "CANVAS_TOKEN is required".to_string(),
            ));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Load from `CANVAS_BASE_URL` / `CANVAS_TOKEN` (reads `.env` if present).
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let base_url = std::env::var("CANVAS_BASE_URL").unwrap_or_default();
        let token = std::env::var("CANVAS_TOKEN").unwrap_or_default();
        Self::new(base_url, token)
    }

    /// Initialize the global config from the environment, failing fast if
    /// the credential or base URL is missing. Subsequent calls return the
    /// already-initialized value.
    pub fn init_global() -> Result<&'static CanvasConfig> {
        if let Some(config) = GLOBAL_CONFIG.get() {
            return Ok(config);
        }
        let config = Self::from_env()?;
        Ok(GLOBAL_CONFIG.get_or_init(|| config))
    }

    /// The global config, if `init_global` has already run.
    pub fn global() -> Option<&'static CanvasConfig> {
        GLOBAL_CONFIG.get()
    }

    /// API base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_base_url_is_a_configuration_error() {
        let err = CanvasConfig::new("", "token-1").unwrap_err();
        assert!(matches!(err, EaselError::Configuration(_)));
        assert!(err.to_string().contains("CANVAS_BASE_URL"));
    }

    #[test]
    fn blank_token_is_a_configuration_error() {
        let err = CanvasConfig::new("https://canvas.example.com/api/v1", "  ").unwrap_err();
        assert!(matches!(err, EaselError::Configuration(_)));
        assert!(err.to_string().contains("CANVAS_TOKEN"));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = CanvasConfig::new("https://canvas.example.com/api/v1/", "token-1").unwrap();
        assert_eq!(config.base_url(), "https://canvas.example.com/api/v1");
    }

    #[test]
    fn debug_output_never_contains_the_token() {
        let config = CanvasConfig::new("https://canvas.example.com/api/v1", "secret-token").unwrap();
        let printed = format!("{config:?}");
        assert!(!printed.contains("secret-token"));
        assert!(printed.contains("<redacted>"));
    }
}
