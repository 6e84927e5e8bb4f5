//! Advisory pipeline for Nasafari Mkulima.
//!
//! Turns a farmer's intent (a question, a crop name or a photo) plus the
//! active [`Locale`] into one request to a [`GenerativeService`] and decodes
//! the answer through the structured-output contract.
//!
//! ```rust
//! use std::sync::Arc;
//! use advisor::{AdvisoryPipeline, PipelineConfig};
//! use mkulima_core::Locale;
//! use mock_service::ScriptedService;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), advisor::AdvisorError> {
//!     let service = Arc::new(ScriptedService::with_reply("not json"));
//!     let pipeline = AdvisoryPipeline::new(service, PipelineConfig::default());
//!
//!     let result = pipeline.ask("Je nitumie mbolea gani kwa mahindi?", Locale::Sw).await?;
//!     assert_eq!(result.confidence, 85);
//!     Ok(())
//! }
//! ```

mod config;
mod error;
pub mod instructions;
mod pipeline;

pub use config::{PipelineConfig, PipelineConfigBuilder};
pub use error::AdvisorError;
pub use pipeline::{sniff_image_mime, AdvisoryPipeline};

pub use mkulima_core::{
    AdviceResult, CropResearchResult, GenerativeService, InlineImage, Locale, PestDiagnosis,
};
