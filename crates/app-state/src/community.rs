//! The community hub: articles, a forum and a local-only peer chat.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveTime};

use crate::catalog::{self, Article, ForumPost};

/// Sender name for messages typed on this device.
pub const SELF_NAME: &str = "Mimi";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CommunityView {
    #[default]
    Articles,
    Forum,
    Chat,
}

impl CommunityView {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "articles" => Some(Self::Articles),
            "forum" => Some(Self::Forum),
            "chat" => Some(Self::Chat),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Articles => "articles",
            Self::Forum => "forum",
            Self::Chat => "chat",
        }
    }
}

impl fmt::Display for CommunityView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommunityView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown community view: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerMessage {
    pub user: String,
    pub text: String,
    /// `HH:MM`
    pub time: String,
}

impl PeerMessage {
    fn new(user: &str, text: &str, time: &str) -> Self {
        Self {
            user: user.to_string(),
            text: text.to_string(),
            time: time.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CommunityHub {
    view: CommunityView,
    messages: Vec<PeerMessage>,
}

impl Default for CommunityHub {
    fn default() -> Self {
        Self {
            view: CommunityView::default(),
            messages: seed_messages(),
        }
    }
}

fn seed_messages() -> Vec<PeerMessage> {
    vec![
        PeerMessage::new(
            "Hassan",
            "Nimepata mavuno mazuri ya nyanya msimu huu!",
            "10:00",
        ),
        PeerMessage::new("Anna", "Hongera Hassan, ulitumia mbolea gani?", "10:05"),
    ]
}

impl CommunityHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> CommunityView {
        self.view
    }

    pub fn set_view(&mut self, view: CommunityView) {
        self.view = view;
    }

    pub fn messages(&self) -> &[PeerMessage] {
        &self.messages
    }

    pub fn articles(&self) -> Vec<Article> {
        catalog::articles()
    }

    pub fn forum_posts(&self) -> Vec<ForumPost> {
        catalog::forum_posts()
    }

    /// Post a message stamped with the current local time.
    pub fn send(&mut self, text: &str) -> bool {
        self.send_at(text, Local::now().time())
    }

    /// Post a message stamped with `at`. Blank text is ignored.
    pub fn send_at(&mut self, text: &str, at: NaiveTime) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.messages.push(PeerMessage {
            user: SELF_NAME.to_string(),
            text: text.to_string(),
            time: at.format("%H:%M").to_string(),
        });
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_messages() {
        let hub = CommunityHub::new();
        assert_eq!(hub.messages().len(), 2);
        assert_eq!(hub.messages()[0].user, "Hassan");
        assert_eq!(hub.messages()[1].time, "10:05");
        assert_eq!(hub.view(), CommunityView::Articles);
    }

    #[test]
    fn test_send_at() {
        let mut hub = CommunityHub::new();
        let at = NaiveTime::from_hms_opt(7, 3, 59).unwrap();
        assert!(hub.send_at("  Nilitumia DAP.  ", at));

        let last = hub.messages().last().unwrap();
        assert_eq!(last, &PeerMessage::new("Mimi", "Nilitumia DAP.", "07:03"));
    }

    #[test]
    fn test_blank_ignored() {
        let mut hub = CommunityHub::new();
        assert!(!hub.send("   "));
        assert_eq!(hub.messages().len(), 2);
    }

    #[test]
    fn test_views_and_reset() {
        let mut hub = CommunityHub::new();
        hub.set_view(CommunityView::parse("Forum").unwrap());
        hub.send("Habari");
        hub.reset();
        assert_eq!(hub.view(), CommunityView::Articles);
        assert_eq!(hub.messages().len(), 2);
        assert_eq!(CommunityView::parse("video"), None);
        assert_eq!("chat".parse::<CommunityView>(), Ok(CommunityView::Chat));
        assert_eq!(hub.articles().len(), 4);
        assert_eq!(hub.forum_posts().len(), 1);
    }
}
