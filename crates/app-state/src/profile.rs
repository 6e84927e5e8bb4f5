//! The signed-in farmer's profile.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Account role. Decides admin tab visibility.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Farming experience level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Experience {
    Beginner,
    #[default]
    Intermediate,
    Expert,
}

/// Subscription tier.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Subscription {
    #[default]
    Free,
    Pro,
    Enterprise,
}

/// The signed-in farmer.
///
/// Serialized with the field names of the persisted session record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub region: String,
    /// Fixed at sign-in for the lifetime of the session.
    pub role: Role,
    pub experience: Experience,
    pub is_authenticated: bool,
    pub subscription: Subscription,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// First character of the name, for the avatar badge.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}
