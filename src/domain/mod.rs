//! Domain types for the soundscore client.
//! Mirrors the server's catalog, review and moderation records.

pub mod audit;
pub mod author;
pub mod error;
pub mod genre;
pub mod like;
pub mod release;
pub mod report;
pub mod review;
pub mod user;

pub use audit::*;
pub use author::*;
pub use error::*;
pub use genre::*;
pub use like::*;
pub use release::*;
pub use report::*;
pub use review::*;
pub use user::*;

/// A server record addressed by a numeric id.
pub trait Entity {
    fn id(&self) -> i64;
}

/// A record that is flagged rather than erased when deleted.
pub trait SoftDelete: Entity {
    fn set_deleted(&mut self, deleted: bool);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_user_role_display_parse() {
        assert_eq!(UserRole::Moderator.to_string(), "MODERATOR");
        assert_eq!(UserRole::from_str("admin").unwrap(), UserRole::Admin);
        assert!(UserRole::from_str("superuser").is_err());
    }

    #[test]
    fn test_release_type_display_parse() {
        assert_eq!(ReleaseType::Mixtape.to_string(), "MIXTAPE");
        assert_eq!(ReleaseType::from_str("ep").unwrap(), ReleaseType::Ep);
        assert!(ReleaseType::from_str("boxset").is_err());
    }

    #[test]
    fn test_report_status_display_parse() {
        assert_eq!(ReportStatus::Pending.to_string(), "PENDING");
        assert_eq!(
            ReportStatus::from_str("Rejected").unwrap(),
            ReportStatus::Rejected
        );
    }

    #[test]
    fn test_like_kind_wire_format() {
        let json = serde_json::to_string(&LikeKind::Dislike).unwrap();
        assert_eq!(json, "\"DISLIKE\"");
    }
}
