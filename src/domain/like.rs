use super::{Entity, ReviewId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a like row
pub type LikeId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LikeKind {
    #[default]
    Like,
    Dislike,
}

impl fmt::Display for LikeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Like => write!(f, "LIKE"),
            Self::Dislike => write!(f, "DISLIKE"),
        }
    }
}

/// A user's reaction to a review. The server keeps at most one per (user, review).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: LikeId,
    pub user_id: UserId,
    pub review_id: ReviewId,
    #[serde(rename = "type")]
    pub kind: LikeKind,
}

impl Entity for Like {
    fn id(&self) -> i64 {
        self.id
    }
}
