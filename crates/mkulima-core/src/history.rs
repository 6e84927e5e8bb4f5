//! Ordered advice conversation transcript.
//!
//! Entries are appended and never mutated.

use crate::contract::AdviceResult;

/// A single entry in the advice conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEntry {
    /// A question typed by the farmer.
    User { text: String },
    /// A decoded advisor answer.
    Advisor(AdviceResult),
}

impl TranscriptEntry {
    /// Create a user entry.
    pub fn user(text: impl Into<String>) -> Self {
        Self::User { text: text.into() }
    }

    /// The text shown in the conversation bubble.
    pub fn text(&self) -> &str {
        match self {
            Self::User { text } => text,
            Self::Advisor(result) => &result.advice,
        }
    }

    /// The advice result, if this is an advisor entry.
    pub fn advice(&self) -> Option<&AdviceResult> {
        match self {
            Self::Advisor(result) => Some(result),
            Self::User { .. } => None,
        }
    }
}

/// Ordered transcript of one advice conversation.
///
/// # Example
///
/// ```rust
/// use mkulima_core::{AdviceResult, ChatTranscript};
///
/// let mut transcript = ChatTranscript::new();
/// transcript.push_question("Je nitumie mbolea gani?");
/// transcript.push_advice(AdviceResult::fallback("Tumia mboji."));
///
/// assert_eq!(transcript.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatTranscript {
    entries: Vec<TranscriptEntry>,
}

impl ChatTranscript {
    /// Create an unbounded transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a question.
    pub fn push_question(&mut self, text: impl Into<String>) {
        self.entries.push(TranscriptEntry::user(text));
    }

    /// Append an advisor answer.
    pub fn push_advice(&mut self, result: AdviceResult) {
        self.entries.push(TranscriptEntry::Advisor(result));
    }

    /// All entries in order.
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Entry at `index`.
    pub fn get(&self, index: usize) -> Option<&TranscriptEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
