//! Scripted service - replays queued replies and records requests.

use std::collections::VecDeque;

use async_trait::async_trait;
use mkulima_core::{GenerativeService, ServiceError, TextRequest, VisionRequest};
use tokio::sync::Mutex;
use tracing::debug;

/// A request observed by [`ScriptedService`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedRequest {
    Text(TextRequest),
    Vision(VisionRequest),
}

impl RecordedRequest {
    /// Model named in the request.
    pub fn model(&self) -> &str {
        match self {
            Self::Text(request) => &request.model,
            Self::Vision(request) => &request.model,
        }
    }

    /// Prompt text of the request.
    pub fn prompt(&self) -> &str {
        match self {
            Self::Text(request) => &request.prompt,
            Self::Vision(request) => &request.prompt,
        }
    }

    /// The text request, if this was one.
    pub fn as_text(&self) -> Option<&TextRequest> {
        match self {
            Self::Text(request) => Some(request),
            Self::Vision(_) => None,
        }
    }

    /// The vision request, if this was one.
    pub fn as_vision(&self) -> Option<&VisionRequest> {
        match self {
            Self::Vision(request) => Some(request),
            Self::Text(_) => None,
        }
    }
}

/// A service that answers from a script.
///
/// Queued replies are consumed in order; once the queue is empty every call
/// gets the default reply.
#[derive(Debug, Default)]
pub struct ScriptedService {
    replies: Mutex<VecDeque<Result<String, ServiceError>>>,
    default_reply: String,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedService {
    /// Create a service whose default reply is an empty string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service that always answers `reply`.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            default_reply: reply.into(),
            ..Self::default()
        }
    }

    /// Queue a successful reply.
    pub async fn push_reply(&self, reply: impl Into<String>) {
        self.replies.lock().await.push_back(Ok(reply.into()));
    }

    /// Queue a transport failure.
    pub async fn push_error(&self, error: ServiceError) {
        self.replies.lock().await.push_back(Err(error));
    }

    /// All requests received so far, in order.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }

    /// The most recent request.
    pub async fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().await.last().cloned()
    }

    async fn answer(&self, request: RecordedRequest) -> Result<String, ServiceError> {
        debug!(model = request.model(), "ScriptedService received request");
        self.requests.lock().await.push(request);
        match self.replies.lock().await.pop_front() {
            Some(reply) => reply,
            None => Ok(self.default_reply.clone()),
        }
    }
}

#[async_trait]
impl GenerativeService for ScriptedService {
    async fn generate_text(&self, request: TextRequest) -> Result<String, ServiceError> {
        self.answer(RecordedRequest::Text(request)).await
    }

    async fn generate_vision(&self, request: VisionRequest) -> Result<String, ServiceError> {
        self.answer(RecordedRequest::Vision(request)).await
    }

    fn name(&self) -> &str {
        "ScriptedService"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mkulima_core::{InlineImage, ResponseSchema};

    #[tokio::test]
    async fn test_queue_then_default() {
        let service = ScriptedService::with_reply("default");
        service.push_reply("first").await;
        service
            .push_error(ServiceError::Network("down".to_string()))
            .await;

        let request = TextRequest::json("m", "p");
        assert_eq!(service.generate_text(request.clone()).await.unwrap(), "first");
        assert!(service.generate_text(request.clone()).await.is_err());
        assert_eq!(service.generate_text(request).await.unwrap(), "default");
    }

    #[tokio::test]
    async fn test_records_requests_in_order() {
        let service = ScriptedService::new();
        service
            .generate_text(TextRequest::json("text-model", "swali"))
            .await
            .unwrap();
        service
            .generate_vision(VisionRequest::json(
                "vision-model",
                InlineImage::new("image/png", vec![7]),
                "picha",
                ResponseSchema::object(),
            ))
            .await
            .unwrap();

        let requests = service.requests().await;
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].model(), "text-model");
        assert!(requests[0].as_text().is_some());
        assert_eq!(requests[1].prompt(), "picha");
        assert!(requests[1].as_vision().is_some());
        assert_eq!(service.last_request().await, Some(requests[1].clone()));
    }

    #[tokio::test]
    async fn test_service_name() {
        assert_eq!(ScriptedService::new().name(), "ScriptedService");
    }
}
