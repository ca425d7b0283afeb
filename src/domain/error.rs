//! Domain error types.
//!
//! These are rule violations caught on the client before a request is sent.
//! The operation layer reports them the same way as a server-side validation
//! failure.

use super::{ReportStatus, ScoreError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid review score: {0}")]
    Score(#[from] ScoreError),

    #[error("Invalid report status transition from {current} to {next}")]
    InvalidReportTransition {
        current: ReportStatus,
        next: ReportStatus,
    },

    #[error("Field must not be empty: {0}")]
    EmptyField(&'static str),
}
