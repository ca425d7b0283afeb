use super::{Entity, SoftDelete};
use serde::{Deserialize, Serialize};

/// Unique identifier for an author (artist or producer)
pub type AuthorId = i64;

/// A credited author of releases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    #[serde(default)]
    pub is_artist: bool,
    #[serde(default)]
    pub is_producer: bool,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub follower_count: u32,
    /// Soft-delete flag; deleted authors stay in history.
    #[serde(default)]
    pub is_deleted: bool,
}

impl Entity for Author {
    fn id(&self) -> i64 {
        self.id
    }
}

impl SoftDelete for Author {
    fn set_deleted(&mut self, deleted: bool) {
        self.is_deleted = deleted;
    }
}

/// Fields sent when creating or editing an author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDraft {
    pub name: String,
    pub is_artist: bool,
    pub is_producer: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Short author reference embedded in a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRef {
    pub id: AuthorId,
    pub name: String,
}
