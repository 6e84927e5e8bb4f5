use advisor::AdvisorError;
use mkulima_core::{InlineImage, PestDiagnosis};
use tracing::warn;

use super::{InFlight, PendingRequest, RequestTicket};

/// An image chosen by the farmer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub image: InlineImage,
    /// Where the image came from, for display.
    pub source: String,
}

/// The pest scanner: one image, at most one diagnosis.
#[derive(Debug, Default)]
pub struct PestScreen {
    upload: Option<ImageUpload>,
    result: Option<PestDiagnosis>,
    inflight: InFlight,
    error: Option<String>,
}

impl PestScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current image and request its diagnosis. The previous
    /// result, and any request still running for the previous image, are
    /// discarded. An empty image is ignored.
    pub fn upload(&mut self, upload: ImageUpload) -> Option<PendingRequest<InlineImage>> {
        if upload.image.data.is_empty() {
            return None;
        }

        let image = upload.image.clone();
        self.upload = Some(upload);
        self.result = None;
        self.error = None;
        Some(PendingRequest {
            ticket: self.inflight.begin(),
            payload: image,
        })
    }

    /// Discard the image, its result and any in-flight scan.
    pub fn clear_image(&mut self) {
        self.inflight.invalidate();
        self.upload = None;
        self.result = None;
        self.error = None;
    }

    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: Result<PestDiagnosis, AdvisorError>,
    ) -> bool {
        if !self.inflight.settle(ticket) {
            return false;
        }
        match result {
            Ok(diagnosis) => self.result = Some(diagnosis),
            Err(err) => {
                warn!(error = %err, "Pest diagnosis failed");
                self.error = Some(err.to_string());
            }
        }
        true
    }

    pub fn upload_ref(&self) -> Option<&ImageUpload> {
        self.upload.as_ref()
    }

    pub fn result(&self) -> Option<&PestDiagnosis> {
        self.result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.inflight.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Text for sharing the current diagnosis.
    pub fn share_text(&self) -> Option<String> {
        self.result.as_ref().map(share_text)
    }

    pub fn reset(&mut self) {
        self.clear_image();
    }
}

/// Shareable summary of a diagnosis.
pub fn share_text(diagnosis: &PestDiagnosis) -> String {
    format!(
        "Utambuzi wa Nasafari Mkulima:\nZao: {}\nMatibabu: {}\nConfidence: {}%",
        diagnosis.diagnosis, diagnosis.treatment, diagnosis.confidence
    )
}
