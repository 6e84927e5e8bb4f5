//! The advisory pipeline.

use std::sync::Arc;

use mkulima_core::{
    AdviceResult, CropResearchResult, GenerativeService, InlineImage, Locale, PestDiagnosis,
    TextRequest, VisionRequest,
};
use tracing::{debug, info};

use crate::config::PipelineConfig;
use crate::error::AdvisorError;
use crate::instructions;

/// Three stateless request flows over one generative service.
///
/// Cloning is cheap; each clone shares the same service, so a clone can be
/// moved into a spawned task per request. No call retries or times out.
#[derive(Clone)]
pub struct AdvisoryPipeline {
    service: Arc<dyn GenerativeService>,
    config: PipelineConfig,
}

impl AdvisoryPipeline {
    /// Create a pipeline over the given service.
    pub fn new(service: Arc<dyn GenerativeService>, config: PipelineConfig) -> Self {
        info!(
            service = service.name(),
            text_model = %config.text_model,
            vision_model = %config.vision_model,
            "Advisory pipeline initialized"
        );
        for (name, hash) in instructions::fingerprints() {
            debug!(template = name, fingerprint = %hash, "Instruction template");
        }

        Self { service, config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Name of the underlying service.
    pub fn service_name(&self) -> &str {
        self.service.name()
    }

    /// Ask the agricultural advisor a free-text question.
    ///
    /// Blank questions are rejected without a network call.
    pub async fn ask(&self, question: &str, locale: Locale) -> Result<AdviceResult, AdvisorError> {
        if question.trim().is_empty() {
            return Err(AdvisorError::EmptyQuestion);
        }

        info!(locale = %locale, chars = question.chars().count(), "Dispatching advice request");

        let request = TextRequest::json(&self.config.text_model, question)
            .with_system_instruction(instructions::advice_system_instruction(locale))
            .with_temperature(self.config.advice_temperature);

        let raw = self.service.generate_text(request).await?;
        Ok(AdviceResult::decode(&raw))
    }

    /// Look up growing conditions for a crop.
    pub async fn research_crop(
        &self,
        crop_name: &str,
        locale: Locale,
    ) -> Result<CropResearchResult, AdvisorError> {
        if crop_name.trim().is_empty() {
            return Err(AdvisorError::EmptyCropName);
        }

        info!(locale = %locale, crop = crop_name, "Dispatching crop research request");

        let prompt = instructions::crop_research_prompt(crop_name, locale);
        let request = TextRequest::json(&self.config.text_model, prompt)
            .with_schema(instructions::crop_research_schema());

        let raw = self.service.generate_text(request).await?;
        Ok(CropResearchResult::decode(&raw))
    }

    /// Diagnose a pest or disease from image bytes, declared with the
    /// configured default MIME type.
    pub async fn diagnose_pest(
        &self,
        image: Vec<u8>,
        locale: Locale,
    ) -> Result<PestDiagnosis, AdvisorError> {
        let mime_type = self.config.image_mime_type.clone();
        self.diagnose_pest_image(InlineImage::new(mime_type, image), locale)
            .await
    }

    /// Diagnose a pest or disease from an image with an explicit MIME type.
    ///
    /// The bytes are passed through verbatim: no resizing, compression or
    /// content validation. Only an empty image is rejected.
    pub async fn diagnose_pest_image(
        &self,
        image: InlineImage,
        locale: Locale,
    ) -> Result<PestDiagnosis, AdvisorError> {
        if image.data.is_empty() {
            return Err(AdvisorError::EmptyImage);
        }

        info!(
            locale = %locale,
            mime_type = %image.mime_type,
            bytes = image.data.len(),
            "Dispatching pest diagnosis request"
        );

        let request = VisionRequest::json(
            &self.config.vision_model,
            image,
            instructions::pest_prompt(locale),
            instructions::pest_diagnosis_schema(),
        );

        let raw = self.service.generate_vision(request).await?;
        Ok(PestDiagnosis::decode(&raw))
    }
}

/// Guess an image MIME type from its leading bytes.
///
/// Returns `None` for unrecognised content; callers then declare the
/// configured default.
pub fn sniff_image_mime(bytes: &[u8]) -> Option<&'static str> {
    const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    const JPEG: &[u8] = &[0xff, 0xd8, 0xff];

    if bytes.starts_with(PNG) {
        Some("image/png")
    } else if bytes.starts_with(JPEG) {
        Some("image/jpeg")
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        Some("image/gif")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_service::{FailingService, ScriptedService};

    fn pipeline(service: Arc<ScriptedService>) -> AdvisoryPipeline {
        AdvisoryPipeline::new(service, PipelineConfig::default())
    }

    #[tokio::test]
    async fn test_ask_uses_locale_instruction() {
        for locale in mkulima_core::SUPPORTED_LOCALES {
            let service = Arc::new(ScriptedService::with_reply(
                r#"{"advice":"a","reasoning":"r","confidence":70}"#,
            ));
            pipeline(service.clone())
                .ask("Swali", *locale)
                .await
                .unwrap();

            let request = service.last_request().await.unwrap();
            let text = request.as_text().unwrap();
            assert_eq!(
                text.system_instruction.as_deref(),
                Some(instructions::advice_system_instruction(*locale))
            );
            assert_eq!(text.model, "gemini-3-pro-preview");
            assert_eq!(text.temperature, Some(0.7));
            assert!(text.response_schema.is_none());
        }
    }

    #[tokio::test]
    async fn test_blank_question_never_dispatches() {
        let service = Arc::new(ScriptedService::new());
        let err = pipeline(service.clone())
            .ask("   \n", Locale::Sw)
            .await
            .unwrap_err();

        assert!(matches!(err, AdvisorError::EmptyQuestion));
        assert!(err.is_input_rejection());
        assert!(service.requests().await.is_empty());
    }

    #[tokio::test]
    async fn test_research_crop_sends_schema_hint() {
        let service = Arc::new(ScriptedService::with_reply(r#"{"climate":"Joto"}"#));
        let result = pipeline(service.clone())
            .research_crop("Nyanya", Locale::Sw)
            .await
            .unwrap();

        assert_eq!(result.climate.as_deref(), Some("Joto"));
        assert!(result.soil.is_none());

        let request = service.last_request().await.unwrap();
        let text = request.as_text().unwrap();
        assert!(text.prompt.contains("Nyanya"));
        assert!(text.system_instruction.is_none());
        assert!(text.temperature.is_none());
        assert_eq!(text.response_schema, Some(instructions::crop_research_schema()));
    }

    #[tokio::test]
    async fn test_research_crop_malformed_is_empty() {
        let service = Arc::new(ScriptedService::with_reply("<html>oops</html>"));
        let result = pipeline(service)
            .research_crop("Mpunga", Locale::En)
            .await
            .unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_diagnose_pest_passes_bytes_verbatim() {
        let service = Arc::new(ScriptedService::with_reply(
            r#"{"diagnosis":"Aphids","treatment":"Soap spray","confidence":64}"#,
        ));
        let bytes = vec![0xff, 0xd8, 0xff, 0x00, 0x42];
        let result = pipeline(service.clone())
            .diagnose_pest(bytes.clone(), Locale::En)
            .await
            .unwrap();

        assert_eq!(result.diagnosis, "Aphids");
        assert_eq!(result.confidence, 64.0);

        let request = service.last_request().await.unwrap();
        let vision = request.as_vision().unwrap();
        assert_eq!(vision.image.data, bytes);
        assert_eq!(vision.image.mime_type, "image/jpeg");
        assert_eq!(vision.model, "gemini-3-flash-preview");
        assert_eq!(vision.prompt, instructions::pest_prompt(Locale::En));
        assert!(vision.response_schema.is_enforced());
    }

    #[tokio::test]
    async fn test_empty_image_rejected() {
        let service = Arc::new(ScriptedService::new());
        let err = pipeline(service.clone())
            .diagnose_pest(Vec::new(), Locale::Sw)
            .await
            .unwrap_err();
        assert!(matches!(err, AdvisorError::EmptyImage));
        assert!(service.requests().await.is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let pipeline = AdvisoryPipeline::new(
            Arc::new(FailingService::default()),
            PipelineConfig::default(),
        );

        let err = pipeline.ask("Swali", Locale::Sw).await.unwrap_err();
        assert!(matches!(err, AdvisorError::Service(_)));
        assert!(!err.is_input_rejection());

        assert!(pipeline.research_crop("Mahindi", Locale::Sw).await.is_err());
        assert!(pipeline.diagnose_pest(vec![1], Locale::Sw).await.is_err());
    }

    #[test]
    fn test_sniff_image_mime() {
        assert_eq!(
            sniff_image_mime(&[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0]),
            Some("image/png")
        );
        assert_eq!(sniff_image_mime(&[0xff, 0xd8, 0xff, 0xe0]), Some("image/jpeg"));
        assert_eq!(sniff_image_mime(b"RIFF\0\0\0\0WEBPVP8 "), Some("image/webp"));
        assert_eq!(sniff_image_mime(b"GIF89a..."), Some("image/gif"));
        assert_eq!(sniff_image_mime(b"%PDF-1.7"), None);
        assert_eq!(sniff_image_mime(&[]), None);
    }
}
