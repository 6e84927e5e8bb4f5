//! Delayed service - wraps another service with artificial delay.

use std::time::Duration;

use async_trait::async_trait;
use mkulima_core::{GenerativeService, ServiceError, TextRequest, VisionRequest};
use tokio::time::sleep;

/// A service that wraps another service and adds artificial delay.
///
/// Useful for exercising loading states and results that arrive after the
/// requesting screen has gone away.
pub struct DelayedService<S: GenerativeService> {
    inner: S,
    delay: Duration,
}

impl<S: GenerativeService> DelayedService<S> {
    /// Create a new DelayedService wrapping the given service.
    pub fn new(inner: S, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Create a service with a delay in milliseconds.
    pub fn with_millis(inner: S, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }

    /// The wrapped service.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: GenerativeService> GenerativeService for DelayedService<S> {
    async fn generate_text(&self, request: TextRequest) -> Result<String, ServiceError> {
        sleep(self.delay).await;
        self.inner.generate_text(request).await
    }

    async fn generate_vision(&self, request: VisionRequest) -> Result<String, ServiceError> {
        sleep(self.delay).await;
        self.inner.generate_vision(request).await
    }

    fn name(&self) -> &str {
        "DelayedService"
    }
}
