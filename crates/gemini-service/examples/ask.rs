//! Send one advice question straight to Gemini and print the raw JSON.
//!
//! Run with: cargo run -p gemini-service --example ask -- "Je nitumie mbolea gani kwa mahindi?"

use gemini_service::{GeminiService, GenerativeService, TextRequest};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let question = env::args()
        .nth(1)
        .unwrap_or_else(|| "Je nitumie mbolea gani kwa mahindi?".to_string());
    let model = env::var("ADVISOR_TEXT_MODEL").unwrap_or_else(|_| "gemini-3-pro-preview".to_string());

    let service = GeminiService::from_env()?;
    println!("Asking {} via {}...\n", model, service.name());

    let request = TextRequest::json(model, question)
        .with_system_instruction(
            "You are a professional agricultural expert. Return a JSON response with keys: \
             'advice', 'reasoning', and 'confidence' (0-100).",
        )
        .with_temperature(0.7);

    let raw = service.generate_text(request).await?;
    println!("{}", raw);
    Ok(())
}
