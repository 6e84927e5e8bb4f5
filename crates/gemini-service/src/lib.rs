//! Gemini-based generative service.
//!
//! This crate implements [`GenerativeService`] on top of the Gemini
//! `generateContent` REST endpoint, covering both JSON-mode text completions
//! and inline-image vision completions.
//!
//! # Usage
//!
//! ```rust,no_run
//! use gemini_service::{GeminiService, GenerativeService, TextRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = GeminiService::from_env()?;
//!     let raw = service
//!         .generate_text(TextRequest::json("gemini-3-pro-preview", "Mahindi"))
//!         .await?;
//!     println!("{}", raw);
//!     Ok(())
//! }
//! ```

mod api_types;
mod config;
mod service;

pub use config::{GeminiConfig, GeminiConfigBuilder};
pub use service::GeminiService;

// Re-export core types for convenience
pub use mkulima_core::{
    async_trait, GenerativeService, InlineImage, ResponseSchema, ServiceError, TextRequest,
    VisionRequest,
};
