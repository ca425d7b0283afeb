use super::{AuthorId, AuthorRef, Entity, Genre, GenreId, SoftDelete};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a release
pub type ReleaseId = i64;

/// Kind of release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReleaseType {
    #[default]
    Single,
    Ep,
    Album,
    Mixtape,
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "SINGLE"),
            Self::Ep => write!(f, "EP"),
            Self::Album => write!(f, "ALBUM"),
            Self::Mixtape => write!(f, "MIXTAPE"),
        }
    }
}

impl FromStr for ReleaseType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SINGLE" => Ok(Self::Single),
            "EP" => Ok(Self::Ep),
            "ALBUM" => Ok(Self::Album),
            "MIXTAPE" => Ok(Self::Mixtape),
            other => Err(format!("unknown release type: {other}")),
        }
    }
}

/// A catalog release as the server reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    pub id: ReleaseId,
    pub title: String,
    #[serde(rename = "type", default)]
    pub release_type: ReleaseType,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub authors: Vec<AuthorRef>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub like_count: u32,
    #[serde(default)]
    pub review_count: u32,
    /// Recomputed by the server whenever a review changes.
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub is_deleted: bool,
}

impl Release {
    pub fn is_by(&self, author_id: AuthorId) -> bool {
        self.authors.iter().any(|a| a.id == author_id)
    }
}

impl Entity for Release {
    fn id(&self) -> i64 {
        self.id
    }
}

impl SoftDelete for Release {
    fn set_deleted(&mut self, deleted: bool) {
        self.is_deleted = deleted;
    }
}

/// Fields sent when creating or editing a release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseDraft {
    pub title: String,
    #[serde(rename = "type")]
    pub release_type: ReleaseType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    pub author_ids: Vec<AuthorId>,
    pub genre_ids: Vec<GenreId>,
}
