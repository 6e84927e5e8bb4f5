//! Configuration for the advisory pipeline.

use std::env;

/// Default model for text flows (advice, crop research).
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-pro-preview";

/// Default model for the image flow.
pub const DEFAULT_VISION_MODEL: &str = "gemini-3-flash-preview";

/// Default sampling temperature for the advice flow.
pub const DEFAULT_ADVICE_TEMPERATURE: f32 = 0.7;

/// Default MIME type declared for uploaded images.
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// Pipeline configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Model used for advice and crop research.
    pub text_model: String,

    /// Model used for pest diagnosis.
    pub vision_model: String,

    /// Temperature for the advice flow. The other flows use the service default.
    pub advice_temperature: f32,

    /// MIME type declared for images when the caller does not supply one.
    pub image_mime_type: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            vision_model: DEFAULT_VISION_MODEL.to_string(),
            advice_temperature: DEFAULT_ADVICE_TEMPERATURE,
            image_mime_type: DEFAULT_IMAGE_MIME.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Create configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `ADVISOR_TEXT_MODEL` | Model for text flows | `gemini-3-pro-preview` |
    /// | `ADVISOR_VISION_MODEL` | Model for pest scans | `gemini-3-flash-preview` |
    /// | `ADVISOR_TEMPERATURE` | Advice temperature | `0.7` |
    /// | `ADVISOR_IMAGE_MIME` | Default image MIME type | `image/jpeg` |
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let text_model = env::var("ADVISOR_TEXT_MODEL").unwrap_or(defaults.text_model);

        let vision_model = env::var("ADVISOR_VISION_MODEL").unwrap_or(defaults.vision_model);

        let advice_temperature = env::var("ADVISOR_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.advice_temperature);

        let image_mime_type = env::var("ADVISOR_IMAGE_MIME").unwrap_or(defaults.image_mime_type);

        Self {
            text_model,
            vision_model,
            advice_temperature,
            image_mime_type,
        }
    }

    /// Create a new config builder.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

/// Builder for PipelineConfig.
#[derive(Debug, Default)]
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    /// Set the text model.
    pub fn text_model(mut self, model: impl Into<String>) -> Self {
        self.config.text_model = model.into();
        self
    }

    /// Set the vision model.
    pub fn vision_model(mut self, model: impl Into<String>) -> Self {
        self.config.vision_model = model.into();
        self
    }

    /// Set the advice temperature.
    pub fn advice_temperature(mut self, temperature: f32) -> Self {
        self.config.advice_temperature = temperature;
        self
    }

    /// Set the default image MIME type.
    pub fn image_mime_type(mut self, mime: impl Into<String>) -> Self {
        self.config.image_mime_type = mime.into();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> PipelineConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.text_model, "gemini-3-pro-preview");
        assert_eq!(config.vision_model, "gemini-3-flash-preview");
        assert_eq!(config.advice_temperature, 0.7);
        assert_eq!(config.image_mime_type, "image/jpeg");
    }

    #[test]
    fn test_builder_all_options() {
        let config = PipelineConfig::builder()
            .text_model("text")
            .vision_model("vision")
            .advice_temperature(0.2)
            .image_mime_type("image/png")
            .build();

        assert_eq!(config.text_model, "text");
        assert_eq!(config.vision_model, "vision");
        assert_eq!(config.advice_temperature, 0.2);
        assert_eq!(config.image_mime_type, "image/png");
    }

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_advisor_vars() {
            std::env::remove_var("ADVISOR_TEXT_MODEL");
            std::env::remove_var("ADVISOR_VISION_MODEL");
            std::env::remove_var("ADVISOR_TEMPERATURE");
            std::env::remove_var("ADVISOR_IMAGE_MIME");
        }

        // Scenario 1: nothing set, defaults used
        clear_all_advisor_vars();
        assert_eq!(PipelineConfig::from_env(), PipelineConfig::default());

        // Scenario 2: all vars set
        std::env::set_var("ADVISOR_TEXT_MODEL", "gemini-2.5-pro");
        std::env::set_var("ADVISOR_VISION_MODEL", "gemini-2.5-flash");
        std::env::set_var("ADVISOR_TEMPERATURE", "0.3");
        std::env::set_var("ADVISOR_IMAGE_MIME", "image/webp");
        let config = PipelineConfig::from_env();
        assert_eq!(config.text_model, "gemini-2.5-pro");
        assert_eq!(config.vision_model, "gemini-2.5-flash");
        assert_eq!(config.advice_temperature, 0.3);
        assert_eq!(config.image_mime_type, "image/webp");

        // Scenario 3: unparseable temperature falls back to default
        clear_all_advisor_vars();
        std::env::set_var("ADVISOR_TEMPERATURE", "warm");
        assert_eq!(PipelineConfig::from_env().advice_temperature, 0.7);

        clear_all_advisor_vars();
    }
}
