//! Terminal shell for Nasafari Mkulima.
//!
//! Reads commands from stdin and redraws the current screen after each one.
//! AI requests run on their own tasks and report back over a channel, so
//! the shell keeps accepting input while a request is in flight.

mod command;
mod config;
mod render;
mod shell;

use std::sync::Arc;

use advisor::{AdvisoryPipeline, PipelineConfig};
use app_state::{AppState, FileSessionStore};
use gemini_service::GeminiService;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::command::Command;
use crate::config::Config;
use crate::shell::{Flow, Shell};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    let service = GeminiService::from_env()?;
    let pipeline = AdvisoryPipeline::new(Arc::new(service), PipelineConfig::from_env());

    info!(
        data_dir = %config.data_dir.display(),
        locale = %config.locale,
        service = pipeline.service_name(),
        "Starting Nasafari Mkulima"
    );

    let store = FileSessionStore::new(&config.data_dir);
    let app = AppState::boot(Box::new(store), config.locale);
    let (mut shell, mut rx) = Shell::new(app, pipeline);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    shell.redraw();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match Command::parse_line(&line) {
                    Ok(Some(command)) => {
                        if shell.handle(command).await == Flow::Quit {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(err) => println!("{}", err),
                }
                shell.redraw();
            }
            Some(completion) = rx.recv() => {
                if shell.complete(completion) {
                    shell.redraw();
                } else {
                    warn!("Discarded result for a screen that was left");
                }
            }
        }
    }

    info!("Goodbye");
    Ok(())
}
