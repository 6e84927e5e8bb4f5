use advisor::AdvisorError;
use mkulima_core::{AdviceResult, ChatTranscript, TranscriptEntry};
use tracing::warn;

use super::{InFlight, PendingRequest, RequestTicket};

/// The AI advisor conversation.
#[derive(Debug, Default)]
pub struct ChatScreen {
    transcript: ChatTranscript,
    inflight: InFlight,
    error: Option<String>,
    expanded: Option<usize>,
}

impl ChatScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a question. Blank input, or a question while another is still
    /// being answered, is ignored.
    pub fn submit(&mut self, input: &str) -> Option<PendingRequest<String>> {
        let question = input.trim();
        if question.is_empty() || self.inflight.is_loading() {
            return None;
        }

        self.transcript.push_question(question);
        self.error = None;
        Some(PendingRequest {
            ticket: self.inflight.begin(),
            payload: question.to_string(),
        })
    }

    /// Apply the answer to a submitted question. Returns whether it was
    /// applied.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: Result<AdviceResult, AdvisorError>,
    ) -> bool {
        if !self.inflight.settle(ticket) {
            return false;
        }
        match result {
            Ok(advice) => self.transcript.push_advice(advice),
            Err(err) => {
                warn!(error = %err, "Advice request failed");
                self.error = Some(err.to_string());
            }
        }
        true
    }

    /// Expand the reasoning panel of the advice at `index`, or collapse it
    /// if already expanded. Only advisor entries can be expanded.
    pub fn toggle_reasoning(&mut self, index: usize) -> bool {
        if self
            .transcript
            .get(index)
            .and_then(TranscriptEntry::advice)
            .is_none()
        {
            return false;
        }
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
        true
    }

    pub fn expanded_reasoning(&self) -> Option<usize> {
        self.expanded
    }

    pub fn transcript(&self) -> &ChatTranscript {
        &self.transcript
    }

    pub fn is_loading(&self) -> bool {
        self.inflight.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Unmount: drop the conversation and any in-flight question.
    pub fn reset(&mut self) {
        self.inflight.invalidate();
        self.transcript.clear();
        self.error = None;
        self.expanded = None;
    }
}
