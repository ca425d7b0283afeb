use crate::domain::{
    AuditEntry, Author, AuthorId, Genre, GenreId, Like, Release, ReleaseId, Report, Review,
    ReviewId, User, UserId,
};

/// State slice addressed by an action; one per domain plus the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slice {
    Session,
    User,
    Author,
    Release,
    Review,
    Genre,
    Like,
    Report,
    Audit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Session(SessionAction),
    User(UserAction),
    Author(AuthorAction),
    Release(ReleaseAction),
    Review(ReviewAction),
    Genre(GenreAction),
    Like(LikeAction),
    Report(ReportAction),
    Audit(AuditAction),
}

impl Action {
    /// `startLoading` for the given slice.
    pub fn start_loading(slice: Slice) -> Self {
        match slice {
            Slice::Session => Self::Session(SessionAction::StartLoading),
            Slice::User => Self::User(UserAction::StartLoading),
            Slice::Author => Self::Author(AuthorAction::StartLoading),
            Slice::Release => Self::Release(ReleaseAction::StartLoading),
            Slice::Review => Self::Review(ReviewAction::StartLoading),
            Slice::Genre => Self::Genre(GenreAction::StartLoading),
            Slice::Like => Self::Like(LikeAction::StartLoading),
            Slice::Report => Self::Report(ReportAction::StartLoading),
            Slice::Audit => Self::Audit(AuditAction::StartLoading),
        }
    }

    /// `requestFailure` for the given slice.
    pub fn failure(slice: Slice, message: impl Into<String>) -> Self {
        let message = message.into();
        match slice {
            Slice::Session => Self::Session(SessionAction::RequestFailure(message)),
            Slice::User => Self::User(UserAction::RequestFailure(message)),
            Slice::Author => Self::Author(AuthorAction::RequestFailure(message)),
            Slice::Release => Self::Release(ReleaseAction::RequestFailure(message)),
            Slice::Review => Self::Review(ReviewAction::RequestFailure(message)),
            Slice::Genre => Self::Genre(GenreAction::RequestFailure(message)),
            Slice::Like => Self::Like(LikeAction::RequestFailure(message)),
            Slice::Report => Self::Report(ReportAction::RequestFailure(message)),
            Slice::Audit => Self::Audit(AuditAction::RequestFailure(message)),
        }
    }

    pub fn slice(&self) -> Slice {
        match self {
            Self::Session(_) => Slice::Session,
            Self::User(_) => Slice::User,
            Self::Author(_) => Slice::Author,
            Self::Release(_) => Slice::Release,
            Self::Review(_) => Slice::Review,
            Self::Genre(_) => Slice::Genre,
            Self::Like(_) => Slice::Like,
            Self::Report(_) => Slice::Report,
            Self::Audit(_) => Slice::Audit,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    StartLoading,
    LoggedIn { user: User, token: String },
    Registered { user: User, token: String },
    CurrentUserLoaded(User),
    LoggedOut,
    PasswordResetRequested,
    PasswordResetCompleted,
    RequestFailure(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    StartLoading,
    UsersLoaded(Vec<User>),
    ProfileLoaded(User),
    /// Profile edits, block/unblock and role changes all land here.
    UserUpdated(User),
    ClearProfile,
    RequestFailure(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthorAction {
    StartLoading,
    AuthorsLoaded(Vec<Author>),
    DeletedAuthorsLoaded(Vec<Author>),
    AuthorLoaded(Author),
    AuthorCreated(Author),
    AuthorUpdated(Author),
    AuthorDeleted(AuthorId),
    AuthorRestored(Author),
    FollowedLoaded(Vec<Author>),
    AuthorFollowed(Author),
    AuthorUnfollowed(AuthorId),
    ClearCurrent,
    RequestFailure(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseAction {
    StartLoading,
    ReleasesLoaded(Vec<Release>),
    DeletedReleasesLoaded(Vec<Release>),
    SearchResultsLoaded(Vec<Release>),
    ReleaseLoaded(Release),
    AuthorReleasesLoaded {
        author_id: AuthorId,
        releases: Vec<Release>,
    },
    ReleaseCreated(Release),
    ReleaseUpdated(Release),
    ReleaseDeleted(ReleaseId),
    ReleaseRestored(Release),
    FavoritesLoaded(Vec<Release>),
    FavoriteAdded(Release),
    FavoriteRemoved(ReleaseId),
    ClearCurrent,
    ClearSearch,
    RequestFailure(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReviewAction {
    StartLoading,
    ReviewsLoaded(Vec<Review>),
    DeletedReviewsLoaded(Vec<Review>),
    ReviewLoaded(Review),
    ReleaseReviewsLoaded {
        release_id: ReleaseId,
        reviews: Vec<Review>,
    },
    UserReviewsLoaded {
        user_id: UserId,
        reviews: Vec<Review>,
    },
    ReviewCreated(Review),
    ReviewUpdated(Review),
    ReviewDeleted(ReviewId),
    ReviewRestored(Review),
    ClearCurrent,
    RequestFailure(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum GenreAction {
    StartLoading,
    GenresLoaded(Vec<Genre>),
    GenreCreated(Genre),
    GenreUpdated(Genre),
    GenreDeleted(GenreId),
    RequestFailure(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LikeAction {
    StartLoading,
    LikesLoaded(Vec<Like>),
    /// Replaces the like for the same review, or adds it.
    LikeSet(Like),
    LikeRemoved(ReviewId),
    RequestFailure(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportAction {
    StartLoading,
    ReportsLoaded(Vec<Report>),
    ReportCreated(Report),
    ReportProcessed(Report),
    RequestFailure(String),
}

/// The audit log is append-only, so there is no update or delete here.
#[derive(Debug, Clone, PartialEq)]
pub enum AuditAction {
    StartLoading,
    AuditLoaded(Vec<AuditEntry>),
    ModeratorAuditLoaded {
        moderator_id: UserId,
        entries: Vec<AuditEntry>,
    },
    RequestFailure(String),
}
