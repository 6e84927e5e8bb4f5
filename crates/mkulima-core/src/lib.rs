//! Core trait and types shared by every Nasafari Mkulima crate.
//!
//! This crate defines:
//!
//! - [`GenerativeService`] - The seam to the external generative-AI service
//! - [`TextRequest`] / [`VisionRequest`] - Request shapes sent to that service
//! - [`AdviceResult`] / [`CropResearchResult`] / [`PestDiagnosis`] - The
//!   structured-output contract and its total decoders
//! - [`Locale`] - The active display and prompt language
//! - [`ServiceError`] - Transport-level failures
//!
//! # Example
//!
//! ```rust
//! use mkulima_core::{async_trait, GenerativeService, ServiceError, TextRequest, VisionRequest};
//!
//! struct CannedService;
//!
//! #[async_trait]
//! impl GenerativeService for CannedService {
//!     async fn generate_text(&self, _request: TextRequest) -> Result<String, ServiceError> {
//!         Ok(r#"{"advice":"Panda mapema","reasoning":"Mvua","confidence":90}"#.to_string())
//!     }
//!
//!     async fn generate_vision(&self, _request: VisionRequest) -> Result<String, ServiceError> {
//!         Err(ServiceError::Network("offline".to_string()))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "CannedService"
//!     }
//! }
//! ```

mod contract;
mod error;
mod history;
mod locale;
mod prompt;
mod request;
mod service;

pub use contract::{
    AdviceResult, CropResearchResult, PestDiagnosis, FALLBACK_ADVICE_CONFIDENCE,
    FALLBACK_DIAGNOSIS, FALLBACK_PEST_CONFIDENCE, FALLBACK_REASONING, FALLBACK_TREATMENT,
};
pub use error::ServiceError;
pub use history::{ChatTranscript, TranscriptEntry};
pub use locale::{Locale, SUPPORTED_LOCALES};
pub use prompt::hash_prompt;
pub use request::{InlineImage, ResponseSchema, SchemaType, TextRequest, VisionRequest};
pub use service::GenerativeService;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
