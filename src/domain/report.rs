use super::{Entity, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a report
pub type ReportId = i64;

/// What kind of record a report points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportTarget {
    Review,
    User,
    Author,
    Release,
}

impl fmt::Display for ReportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Review => write!(f, "REVIEW"),
            Self::User => write!(f, "USER"),
            Self::Author => write!(f, "AUTHOR"),
            Self::Release => write!(f, "RELEASE"),
        }
    }
}

impl FromStr for ReportTarget {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "REVIEW" => Ok(Self::Review),
            "USER" => Ok(Self::User),
            "AUTHOR" => Ok(Self::Author),
            "RELEASE" => Ok(Self::Release),
            other => Err(format!("unknown report target: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    #[default]
    Pending,
    Resolved,
    Rejected,
}

impl ReportStatus {
    /// Only a pending report can be settled, and only once.
    pub fn can_transition_to(self, next: ReportStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Resolved) | (Self::Pending, Self::Rejected)
        )
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Resolved => write!(f, "RESOLVED"),
            Self::Rejected => write!(f, "REJECTED"),
        }
    }
}

impl FromStr for ReportStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "RESOLVED" => Ok(Self::Resolved),
            "REJECTED" => Ok(Self::Rejected),
            other => Err(format!("unknown report status: {other}")),
        }
    }
}

/// A user complaint awaiting or past moderation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: ReportId,
    pub reporter_id: UserId,
    pub target_type: ReportTarget,
    pub target_id: i64,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub status: ReportStatus,
    #[serde(default)]
    pub moderator_id: Option<UserId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for Report {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Body of `POST /reports`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDraft {
    pub target_type: ReportTarget,
    pub target_id: i64,
    pub reason: String,
}
