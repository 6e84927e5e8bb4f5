//! Mock generative services for tests.
//!
//! - `ScriptedService` - Replays queued responses and records every request
//! - `FailingService` - Fails every call with a transport error
//! - `DelayedService` - Wraps another service with artificial latency
//!
//! For real completions, use the `gemini-service` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_service::{GenerativeService, ScriptedService, TextRequest};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let service = ScriptedService::with_reply(r#"{"soil":"Loam"}"#);
//!     let raw = service
//!         .generate_text(TextRequest::json("model", "Mahindi"))
//!         .await
//!         .unwrap();
//!     assert_eq!(raw, r#"{"soil":"Loam"}"#);
//!     assert_eq!(service.requests().await.len(), 1);
//! }
//! ```

mod delayed;
mod failing;
mod scripted;

pub use mkulima_core::{
    async_trait, GenerativeService, InlineImage, ServiceError, TextRequest, VisionRequest,
};

pub use delayed::DelayedService;
pub use failing::FailingService;
pub use scripted::{RecordedRequest, ScriptedService};
