//! Application state for Nasafari Mkulima.
//!
//! [`AppState`] owns the locale, the theme, the `landing -> auth -> app`
//! view state, the signed-in profile and one controller per AI screen. The
//! signed-in profile survives restarts through a [`SessionStore`].
//!
//! AI requests are not run here. Controllers hand out a [`PendingRequest`]
//! for the caller to dispatch through the advisory pipeline, and take the
//! result back with its [`RequestTicket`]; results for a screen that has
//! since been left or superseded are dropped.

mod app;
pub mod auth;
pub mod catalog;
pub mod community;
mod error;
mod profile;
pub mod screens;
mod session;
mod view;

pub use app::{AppState, Theme};
pub use auth::{AuthMode, Authenticator, Credentials, MockAuthenticator};
pub use community::{CommunityHub, CommunityView, PeerMessage};
pub use error::{AppError, AuthError, SessionError, ViewError};
pub use profile::{Experience, Role, Subscription, UserProfile};
pub use screens::{
    ChatScreen, FarmScreen, ImageUpload, PendingRequest, PestScreen, RequestTicket,
};
pub use session::{FileSessionStore, MemorySessionStore, SessionStore, SESSION_KEY};
pub use view::{visible_tabs, Screen, Tab, ViewState};
