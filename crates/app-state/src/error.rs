//! Error types for application state operations.

use thiserror::Error;

use crate::view::{Screen, Tab};

/// Errors from the session store.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading or writing the stored record failed.
    #[error("session I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored record is not a valid profile.
    #[error("stored session is malformed: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The profile could not be serialized.
    #[error("failed to serialize session: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Rejected view-state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// The action is not valid from the current screen.
    #[error("cannot {action} from the {from} screen")]
    InvalidTransition { from: Screen, action: &'static str },

    /// Tabs exist only inside the authenticated shell.
    #[error("tabs are only reachable after sign-in")]
    NotInApp,

    /// The current role may not open this tab.
    #[error("the {0} tab is not available for this account")]
    NotPermitted(Tab),
}

/// Authentication failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The authenticator refused the credentials.
    #[error("sign-in rejected: {0}")]
    Rejected(String),
}

/// Errors from application-level actions.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    View(#[from] ViewError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}
