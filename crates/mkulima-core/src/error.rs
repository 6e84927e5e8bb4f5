//! Error types for generative service calls.

use thiserror::Error;

/// Transport-level failures talking to the generative service.
///
/// Decode failures are deliberately absent: a response that arrives but
/// does not match the expected shape is absorbed by the contract decoders.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service client is misconfigured (missing key, bad URL).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request never reached the service or the connection broke.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response envelope itself could not be read.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ServiceError {
    /// Whether the failure came from the remote side rather than the client.
    pub fn is_remote(&self) -> bool {
        matches!(self, ServiceError::Api { .. } | ServiceError::InvalidResponse(_))
    }
}
