//! GeminiService implementation using the generateContent API.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use mkulima_core::{async_trait, GenerativeService, ServiceError, TextRequest, VisionRequest};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::api_types::{
    ApiError, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use crate::config::GeminiConfig;

/// A generative service backed by Google's Gemini API.
///
/// Each call is a single stateless request/response round trip. There is no
/// retry and no timeout beyond what the HTTP client imposes; transport
/// failures are returned to the caller.
pub struct GeminiService {
    client: Client,
    config: GeminiConfig,
}

impl GeminiService {
    /// Create a new GeminiService with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, ServiceError> {
        if config.api_key.trim().is_empty() {
            return Err(ServiceError::Configuration("Gemini API key is empty".to_string()));
        }

        let client = Client::builder().build().map_err(|e| {
            ServiceError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        info!(
            "GeminiService initialized with api_url: {}, version: {}",
            config.api_url, config.api_version
        );

        Ok(Self { client, config })
    }

    /// Create a GeminiService from environment variables.
    ///
    /// See [`GeminiConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, ServiceError> {
        let config = GeminiConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn generation_config(
        &self,
        response_mime_type: &str,
        response_schema: Option<serde_json::Value>,
        temperature: Option<f32>,
    ) -> GenerationConfig {
        GenerationConfig {
            response_mime_type: Some(response_mime_type.to_string()),
            response_schema,
            temperature,
            max_output_tokens: self.config.max_output_tokens,
        }
    }

    /// Build the request body for a text completion.
    fn build_text_body(&self, request: &TextRequest) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user(vec![Part::text(request.prompt.clone())])],
            system_instruction: request.system_instruction.as_ref().map(Content::system),
            generation_config: self.generation_config(
                &request.response_mime_type,
                request.response_schema.as_ref().map(|schema| schema.to_value()),
                request.temperature,
            ),
        }
    }

    /// Build the request body for a vision completion: image part first,
    /// then the instruction text.
    fn build_vision_body(&self, request: &VisionRequest) -> GenerateContentRequest {
        let encoded = STANDARD.encode(&request.image.data);
        GenerateContentRequest {
            contents: vec![Content::user(vec![
                Part::inline(request.image.mime_type.clone(), encoded),
                Part::text(request.prompt.clone()),
            ])],
            system_instruction: None,
            generation_config: self.generation_config(
                &request.response_mime_type,
                Some(request.response_schema.to_value()),
                None,
            ),
        }
    }

    /// Make a generateContent request and return the raw response text.
    async fn generate(
        &self,
        model: &str,
        body: GenerateContentRequest,
    ) -> Result<String, ServiceError> {
        let url = self.config.generate_url(model);

        debug!(model, "Sending request to Gemini API");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ServiceError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as API error
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(ServiceError::Api {
                    status: status.as_u16(),
                    message: api_error.error.message,
                });
            }

            return Err(ServiceError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let completion: GenerateContentResponse = response.json().await.map_err(|e| {
            ServiceError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        if let Some(usage) = &completion.usage_metadata {
            debug!(
                "Token usage - prompt: {}, candidates: {}, total: {}",
                usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
            );
        }

        // An empty answer is handed to the contract decoders, which fall back.
        let text = completion.text().unwrap_or_else(|| {
            let reason = completion
                .prompt_feedback
                .as_ref()
                .and_then(|feedback| feedback.block_reason.clone())
                .or_else(|| {
                    completion
                        .candidates
                        .first()
                        .and_then(|candidate| candidate.finish_reason.clone())
                })
                .unwrap_or_else(|| "none".to_string());
            warn!(reason = %reason, "No text in Gemini response");
            String::new()
        });

        Ok(text)
    }
}

#[async_trait]
impl GenerativeService for GeminiService {
    async fn generate_text(&self, request: TextRequest) -> Result<String, ServiceError> {
        let body = self.build_text_body(&request);
        self.generate(&request.model, body).await
    }

    async fn generate_vision(&self, request: VisionRequest) -> Result<String, ServiceError> {
        debug!(
            mime_type = %request.image.mime_type,
            bytes = request.image.data.len(),
            "Submitting image for vision completion"
        );
        let body = self.build_vision_body(&request);
        self.generate(&request.model, body).await
    }

    fn name(&self) -> &str {
        "GeminiService"
    }
}
