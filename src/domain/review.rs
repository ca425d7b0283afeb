use super::{Entity, ReleaseId, SoftDelete, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique identifier for a review
pub type ReviewId = i64;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} must be between {MIN_SCORE} and {MAX_SCORE}, got {value}")]
pub struct ScoreError {
    pub field: &'static str,
    pub value: u8,
}

/// A single sub-score, always within `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub fn new(field: &'static str, value: u8) -> Result<Self, ScoreError> {
        if (MIN_SCORE..=MAX_SCORE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ScoreError { field, value })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Score {
    type Error = ScoreError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new("score", value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

/// The five sub-scores of a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    pub lyrics: Score,
    pub structure: Score,
    pub production: Score,
    pub individuality: Score,
    pub atmosphere: Score,
}

impl Scores {
    /// Builds a score set from raw values, naming the first one out of range.
    pub fn from_raw(
        lyrics: u8,
        structure: u8,
        production: u8,
        individuality: u8,
        atmosphere: u8,
    ) -> Result<Self, ScoreError> {
        Ok(Self {
            lyrics: Score::new("lyrics", lyrics)?,
            structure: Score::new("structure", structure)?,
            production: Score::new("production", production)?,
            individuality: Score::new("individuality", individuality)?,
            atmosphere: Score::new("atmosphere", atmosphere)?,
        })
    }

    pub fn as_array(&self) -> [Score; 5] {
        [
            self.lyrics,
            self.structure,
            self.production,
            self.individuality,
            self.atmosphere,
        ]
    }

    /// Mean of the five sub-scores.
    pub fn average(&self) -> f64 {
        let total: u32 = self.as_array().iter().map(|s| u32::from(s.get())).sum();
        f64::from(total) / 5.0
    }
}

/// A user review of a release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub user_id: UserId,
    pub release_id: ReleaseId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    pub scores: Scores,
    #[serde(default)]
    pub like_count: u32,
    #[serde(default)]
    pub dislike_count: u32,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Review {
    /// Derived from the sub-scores; never set independently.
    pub fn average_score(&self) -> f64 {
        self.scores.average()
    }
}

impl Entity for Review {
    fn id(&self) -> i64 {
        self.id
    }
}

impl SoftDelete for Review {
    fn set_deleted(&mut self, deleted: bool) {
        self.is_deleted = deleted;
    }
}

/// Unvalidated review form input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    pub release_id: ReleaseId,
    pub title: Option<String>,
    pub text: Option<String>,
    pub lyrics: u8,
    pub structure: u8,
    pub production: u8,
    pub individuality: u8,
    pub atmosphere: u8,
}

impl ReviewDraft {
    pub fn scores(&self) -> Result<Scores, ScoreError> {
        Scores::from_raw(
            self.lyrics,
            self.structure,
            self.production,
            self.individuality,
            self.atmosphere,
        )
    }

    /// Validated request body.
    pub fn into_payload(self) -> Result<ReviewPayload, ScoreError> {
        let scores = self.scores()?;
        Ok(ReviewPayload {
            release_id: self.release_id,
            title: self.title,
            text: self.text,
            scores,
        })
    }
}

/// Body of `POST /reviews` and `PUT /reviews/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPayload {
    pub release_id: ReleaseId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub scores: Scores,
}
