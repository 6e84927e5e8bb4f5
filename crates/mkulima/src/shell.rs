//! Command handling and background dispatch of AI requests.

use std::io::Write as _;
use std::path::PathBuf;

use advisor::{sniff_image_mime, AdvisorError, AdvisoryPipeline};
use app_state::{
    AppState, Credentials, ImageUpload, MockAuthenticator, PendingRequest, RequestTicket, Tab,
};
use mkulima_core::{AdviceResult, CropResearchResult, InlineImage, PestDiagnosis};
use tokio::sync::mpsc;

use crate::command::Command;
use crate::render::render;

/// A finished AI request on its way back to the screen that asked.
#[derive(Debug)]
pub enum Completion {
    Advice(RequestTicket, Result<AdviceResult, AdvisorError>),
    Research(RequestTicket, Result<CropResearchResult, AdvisorError>),
    Diagnosis(RequestTicket, Result<PestDiagnosis, AdvisorError>),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    app: AppState,
    pipeline: AdvisoryPipeline,
    completions: mpsc::UnboundedSender<Completion>,
}

impl Shell {
    /// Create a shell and the receiving end of its completion channel.
    pub fn new(
        app: AppState,
        pipeline: AdvisoryPipeline,
    ) -> (Self, mpsc::UnboundedReceiver<Completion>) {
        let (completions, rx) = mpsc::unbounded_channel();
        let shell = Self {
            app,
            pipeline,
            completions,
        };
        (shell, rx)
    }

    pub fn app(&self) -> &AppState {
        &self.app
    }

    pub async fn handle(&mut self, command: Command) -> Flow {
        let outcome = match command {
            Command::Quit => return Flow::Quit,
            Command::Start => self.app.start().map_err(|e| e.to_string()),
            Command::Back => self.app.back().map_err(|e| e.to_string()),
            Command::Signup => {
                self.app.toggle_auth_mode();
                Ok(())
            }
            Command::Login { email } => self
                .app
                .submit_auth(
                    &MockAuthenticator,
                    &Credentials::new(email.unwrap_or_default(), ""),
                )
                .map(|_| ())
                .map_err(|e| e.to_string()),
            Command::Logout => self.app.logout().map_err(|e| e.to_string()),
            Command::Tab { tab } => self.app.select_tab(tab).map_err(|e| e.to_string()),
            Command::Lang => {
                self.app.toggle_locale();
                Ok(())
            }
            Command::Theme => {
                self.app.toggle_theme();
                Ok(())
            }
            Command::Ask { question } => self.ask(&question.join(" ")),
            Command::Why { index } => self.on_tab(Tab::Chat).and_then(|()| {
                if self.app.chat_mut().toggle_reasoning(index) {
                    Ok(())
                } else {
                    Err(format!("message {} has no reasoning", index))
                }
            }),
            Command::Crop { name } => self.research(&name.join(" ")),
            Command::Scan { path } => self.scan(path).await,
            Command::Clear => self
                .on_tab(Tab::Pest)
                .map(|()| self.app.pest_mut().clear_image()),
            Command::Share => self.on_tab(Tab::Pest).and_then(|()| {
                let text = self
                    .app
                    .pest()
                    .share_text()
                    .ok_or_else(|| "nothing to share yet".to_string())?;
                println!("\n{}\n", text);
                Ok(())
            }),
            Command::View { view } => self
                .on_tab(Tab::Community)
                .map(|()| self.app.community_mut().set_view(view)),
            Command::Say { text } => self.on_tab(Tab::Community).map(|()| {
                self.app.community_mut().send(&text.join(" "));
            }),
        };

        if let Err(message) = outcome {
            println!("! {}", message);
        }
        Flow::Continue
    }

    /// Switch to `tab` unless it is already active.
    fn on_tab(&mut self, tab: Tab) -> Result<(), String> {
        if self.app.tab() == Some(tab) {
            return Ok(());
        }
        self.app.select_tab(tab).map_err(|e| e.to_string())
    }

    fn ask(&mut self, question: &str) -> Result<(), String> {
        self.on_tab(Tab::Chat)?;
        let Some(PendingRequest { ticket, payload }) = self.app.chat_mut().submit(question) else {
            return Ok(());
        };

        let pipeline = self.pipeline.clone();
        let tx = self.completions.clone();
        let locale = self.app.locale();
        tokio::spawn(async move {
            let result = pipeline.ask(&payload, locale).await;
            let _ = tx.send(Completion::Advice(ticket, result));
        });
        Ok(())
    }

    fn research(&mut self, crop: &str) -> Result<(), String> {
        self.on_tab(Tab::MyFarm)?;
        let Some(PendingRequest { ticket, payload }) = self.app.farm_mut().select_crop(crop) else {
            return Ok(());
        };

        let pipeline = self.pipeline.clone();
        let tx = self.completions.clone();
        let locale = self.app.locale();
        tokio::spawn(async move {
            let result = pipeline.research_crop(&payload, locale).await;
            let _ = tx.send(Completion::Research(ticket, result));
        });
        Ok(())
    }

    async fn scan(&mut self, path: PathBuf) -> Result<(), String> {
        self.on_tab(Tab::Pest)?;
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
        if bytes.is_empty() {
            return Err(format!("{} is empty", path.display()));
        }

        let mime_type = sniff_image_mime(&bytes)
            .map(str::to_string)
            .unwrap_or_else(|| self.pipeline.config().image_mime_type.clone());
        let upload = ImageUpload {
            image: InlineImage::new(mime_type, bytes),
            source: path.display().to_string(),
        };
        let Some(PendingRequest { ticket, payload }) = self.app.pest_mut().upload(upload) else {
            return Ok(());
        };

        let pipeline = self.pipeline.clone();
        let tx = self.completions.clone();
        let locale = self.app.locale();
        tokio::spawn(async move {
            let result = pipeline.diagnose_pest_image(payload, locale).await;
            let _ = tx.send(Completion::Diagnosis(ticket, result));
        });
        Ok(())
    }

    /// Route a finished request to its screen. Returns whether it was applied.
    pub fn complete(&mut self, completion: Completion) -> bool {
        match completion {
            Completion::Advice(ticket, result) => self.app.chat_mut().complete(ticket, result),
            Completion::Research(ticket, result) => self.app.farm_mut().complete(ticket, result),
            Completion::Diagnosis(ticket, result) => self.app.pest_mut().complete(ticket, result),
        }
    }

    pub fn redraw(&self) {
        print!("{}\n> ", render(self.app()));
        let _ = std::io::stdout().flush();
    }
}
