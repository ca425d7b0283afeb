use super::{Entity, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an audit entry
pub type AuditId = i64;

/// Moderation actions recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModerationAction {
    BlockUser,
    UnblockUser,
    ChangeRole,
    DeleteReview,
    RestoreReview,
    DeleteRelease,
    RestoreRelease,
    DeleteAuthor,
    RestoreAuthor,
    ResolveReport,
    RejectReport,
}

impl fmt::Display for ModerationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BlockUser => "BLOCK_USER",
            Self::UnblockUser => "UNBLOCK_USER",
            Self::ChangeRole => "CHANGE_ROLE",
            Self::DeleteReview => "DELETE_REVIEW",
            Self::RestoreReview => "RESTORE_REVIEW",
            Self::DeleteRelease => "DELETE_RELEASE",
            Self::RestoreRelease => "RESTORE_RELEASE",
            Self::DeleteAuthor => "DELETE_AUTHOR",
            Self::RestoreAuthor => "RESTORE_AUTHOR",
            Self::ResolveReport => "RESOLVE_REPORT",
            Self::RejectReport => "REJECT_REPORT",
        };
        f.write_str(name)
    }
}

/// One append-only moderation log line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub id: AuditId,
    pub moderator_id: UserId,
    pub target_id: i64,
    pub action: ModerationAction,
    #[serde(default)]
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for AuditEntry {
    fn id(&self) -> i64 {
        self.id
    }
}
