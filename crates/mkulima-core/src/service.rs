//! The generative service trait definition.

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::request::{TextRequest, VisionRequest};

/// A generative-AI completion service.
///
/// Implementations return the raw text the model produced; interpreting it
/// is the job of the contract decoders. This trait is object-safe and can be
/// used as `Arc<dyn GenerativeService>`.
#[async_trait]
pub trait GenerativeService: Send + Sync {
    /// Run a text completion and return the raw response text.
    async fn generate_text(&self, request: TextRequest) -> Result<String, ServiceError>;

    /// Run a vision completion (inline image plus prompt) and return the raw
    /// response text.
    async fn generate_vision(&self, request: VisionRequest) -> Result<String, ServiceError>;

    /// Get a human-readable name for this service implementation.
    fn name(&self) -> &str;
}
