//! Failing service - every call is a transport failure.

use async_trait::async_trait;
use mkulima_core::{GenerativeService, ServiceError, TextRequest, VisionRequest};

/// A service whose every call fails with a network error.
#[derive(Debug, Clone)]
pub struct FailingService {
    message: String,
}

impl Default for FailingService {
    fn default() -> Self {
        Self::new("service unreachable")
    }
}

impl FailingService {
    /// Create a failing service with the given error message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl GenerativeService for FailingService {
    async fn generate_text(&self, _request: TextRequest) -> Result<String, ServiceError> {
        Err(ServiceError::Network(self.message.clone()))
    }

    async fn generate_vision(&self, _request: VisionRequest) -> Result<String, ServiceError> {
        Err(ServiceError::Network(self.message.clone()))
    }

    fn name(&self) -> &str {
        "FailingService"
    }
}
