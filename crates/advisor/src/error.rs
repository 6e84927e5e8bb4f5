//! Error types for advisory pipeline operations.

use mkulima_core::ServiceError;
use thiserror::Error;

/// Errors returned by the advisory pipeline.
///
/// Decode failures never appear here; they are absorbed into fallback
/// results. Input errors are raised before any network call.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// The question was empty or whitespace.
    #[error("question is empty")]
    EmptyQuestion,

    /// The crop name was empty or whitespace.
    #[error("crop name is empty")]
    EmptyCropName,

    /// The image had no bytes.
    #[error("image is empty")]
    EmptyImage,

    /// The generative service call failed.
    #[error("service error: {0}")]
    Service(#[from] ServiceError),
}

impl AdvisorError {
    /// Whether the request was rejected before dispatch.
    pub fn is_input_rejection(&self) -> bool {
        !matches!(self, AdvisorError::Service(_))
    }
}
