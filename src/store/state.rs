//! Client-side state tree, one slice per domain.
//!
//! Every list mirrors what the server last returned. The only local logic is
//! membership lookups over those lists.

use super::collections::{Keyed, List, contains};
use crate::domain::{
    AuditEntry, Author, AuthorId, Genre, Like, Release, ReleaseId, Report, ReportStatus, Review,
    ReviewId, User, UserId,
};

/// The root aggregate: every domain slice under a fixed field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub session: SessionState,
    pub user: UserState,
    pub author: AuthorState,
    pub release: ReleaseState,
    pub review: ReviewState,
    pub genre: GenreState,
    pub like: LikeState,
    pub report: ReportState,
    pub audit: AuditState,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    /// Set once the server accepted a forgot-password request.
    pub reset_requested: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user.as_ref().map(|u| u.id)
    }

    pub fn can_moderate(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role.can_moderate())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserState {
    /// Admin listing.
    pub users: List<User>,
    /// The profile currently being viewed.
    pub profile: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthorState {
    pub authors: List<Author>,
    pub deleted: List<Author>,
    pub current: Option<Author>,
    /// Authors the signed-in user follows.
    pub followed: List<Author>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthorState {
    pub fn is_following(&self, author_id: AuthorId) -> bool {
        contains(&self.followed, author_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReleaseState {
    pub releases: List<Release>,
    pub deleted: List<Release>,
    pub search_results: List<Release>,
    pub current: Option<Release>,
    /// The signed-in user's favorites.
    pub favorites: List<Release>,
    pub by_author: Keyed<AuthorId, Release>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ReleaseState {
    pub fn is_favorite(&self, release_id: ReleaseId) -> bool {
        contains(&self.favorites, release_id)
    }

    pub fn for_author(&self, author_id: AuthorId) -> Option<&[Release]> {
        self.by_author.get(&author_id).map(|list| list.as_slice())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewState {
    pub reviews: List<Review>,
    pub deleted: List<Review>,
    pub current: Option<Review>,
    pub release_reviews: Keyed<ReleaseId, Review>,
    pub user_reviews: Keyed<UserId, Review>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ReviewState {
    pub fn for_release(&self, release_id: ReleaseId) -> Option<&[Review]> {
        self.release_reviews
            .get(&release_id)
            .map(|list| list.as_slice())
    }

    pub fn for_user(&self, user_id: UserId) -> Option<&[Review]> {
        self.user_reviews.get(&user_id).map(|list| list.as_slice())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenreState {
    pub genres: List<Genre>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LikeState {
    /// The signed-in user's likes and dislikes.
    pub likes: List<Like>,
    pub loading: bool,
    pub error: Option<String>,
}

impl LikeState {
    pub fn like_for(&self, review_id: ReviewId) -> Option<&Like> {
        self.likes.iter().find(|l| l.review_id == review_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportState {
    pub reports: List<Report>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ReportState {
    pub fn pending(&self) -> impl Iterator<Item = &Report> {
        self.reports
            .iter()
            .filter(|r| r.status == ReportStatus::Pending)
    }

    pub fn find(&self, id: i64) -> Option<&Report> {
        self.reports.iter().find(|r| r.id == id)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditState {
    pub entries: List<AuditEntry>,
    pub by_moderator: Keyed<UserId, AuditEntry>,
    pub loading: bool,
    pub error: Option<String>,
}
