//! Sign-in.
//!
//! [`MockAuthenticator`] is a non-production placeholder: it accepts any
//! credentials and derives the role from the email text. It must be replaced
//! by a verified credential or claims source before real use.

use tracing::info;

use crate::error::AuthError;
use crate::profile::{Experience, Role, Subscription, UserProfile};

/// Whether the auth form is signing in or creating an account.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }
}

/// What the auth form submits.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Turns submitted credentials into a profile.
pub trait Authenticator {
    fn authenticate(
        &self,
        credentials: &Credentials,
        mode: AuthMode,
    ) -> Result<UserProfile, AuthError>;
}

/// Name used when the email has no local part.
pub const GUEST_NAME: &str = "Guest Farmer";

/// Region assigned to every mock sign-in.
pub const DEFAULT_REGION: &str = "Mbeya";

/// Placeholder authenticator that accepts everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockAuthenticator;

impl Authenticator for MockAuthenticator {
    fn authenticate(
        &self,
        credentials: &Credentials,
        mode: AuthMode,
    ) -> Result<UserProfile, AuthError> {
        let email = credentials.email.trim();
        let role = if email.contains("admin") {
            Role::Admin
        } else {
            Role::User
        };

        let name = email
            .split('@')
            .next()
            .filter(|local| !local.is_empty())
            .unwrap_or(GUEST_NAME)
            .to_string();

        info!(role = %role, ?mode, "Mock sign-in accepted");

        Ok(UserProfile {
            name,
            email: email.to_string(),
            region: DEFAULT_REGION.to_string(),
            role,
            experience: Experience::Intermediate,
            is_authenticated: true,
            subscription: Subscription::Free,
        })
    }
}
