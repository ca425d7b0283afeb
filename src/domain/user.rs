use super::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a user account
pub type UserId = i64;

/// Account role. The set is closed; the server rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[default]
    User,
    Author,
    Moderator,
    Admin,
}

impl UserRole {
    /// Moderators and admins can process reports and read the audit log.
    pub fn can_moderate(self) -> bool {
        matches!(self, Self::Moderator | Self::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "USER"),
            Self::Author => write!(f, "AUTHOR"),
            Self::Moderator => write!(f, "MODERATOR"),
            Self::Admin => write!(f, "ADMIN"),
        }
    }
}

impl FromStr for UserRole {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USER" => Ok(Self::User),
            "AUTHOR" => Ok(Self::Author),
            "MODERATOR" => Ok(Self::Moderator),
            "ADMIN" => Ok(Self::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// A registered account as the server reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub is_blocked: bool,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub like_count: u32,
    #[serde(default)]
    pub follower_count: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for User {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Editable profile fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Credentials for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload for `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Token plus account returned by login and register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Payload for `POST /auth/reset-password`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordReset {
    pub token: String,
    pub password: String,
}
