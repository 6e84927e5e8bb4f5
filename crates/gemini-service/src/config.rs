//! Configuration for GeminiService.

use mkulima_core::ServiceError;
use std::env;

/// Default Gemini API base URL.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Default Gemini API version path segment.
pub const DEFAULT_API_VERSION: &str = "v1beta";

/// Configuration for GeminiService.
#[derive(Clone)]
pub struct GeminiConfig {
    /// Gemini API base URL.
    pub api_url: String,

    /// API version path segment.
    pub api_version: String,

    /// API key for authentication.
    pub api_key: String,

    /// Maximum output tokens per response.
    pub max_output_tokens: Option<u32>,
}

// Never print the key.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_url", &self.api_url)
            .field("api_version", &self.api_version)
            .field("api_key", &"<redacted>")
            .field("max_output_tokens", &self.max_output_tokens)
            .finish()
    }
}

impl GeminiConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `GEMINI_API_KEY` - API key (`API_KEY` is accepted as a fallback)
    ///
    /// Optional environment variables:
    /// - `GEMINI_API_URL` - API URL (default: https://generativelanguage.googleapis.com)
    /// - `GEMINI_API_VERSION` - API version (default: v1beta)
    /// - `GEMINI_MAX_OUTPUT_TOKENS` - Max output tokens (default: unset)
    pub fn from_env() -> Result<Self, ServiceError> {
        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ServiceError::Configuration("GEMINI_API_KEY not set".to_string()))?;

        let api_url = env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let api_version =
            env::var("GEMINI_API_VERSION").unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());

        let max_output_tokens = env::var("GEMINI_MAX_OUTPUT_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok());

        Ok(Self {
            api_url,
            api_version,
            api_key,
            max_output_tokens,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }

    /// The `generateContent` endpoint for a model.
    pub fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.api_version,
            model
        )
    }
}

/// Builder for GeminiConfig.
#[derive(Debug)]
pub struct GeminiConfigBuilder {
    config: GeminiConfig,
}

impl Default for GeminiConfigBuilder {
    fn default() -> Self {
        Self {
            config: GeminiConfig {
                api_url: DEFAULT_API_URL.to_string(),
                api_version: DEFAULT_API_VERSION.to_string(),
                api_key: String::new(),
                max_output_tokens: None,
            },
        }
    }
}

impl GeminiConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the API version.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.config.api_version = version.into();
        self
    }

    /// Set the max output tokens.
    pub fn max_output_tokens(mut self, tokens: u32) -> Self {
        self.config.max_output_tokens = Some(tokens);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> GeminiConfig {
        self.config
    }
}
