//! Endpoint registry: one variant per server operation.
//!
//! Ids are interpolated as-is; a bad id yields a path the server rejects.

use crate::domain::{AuthorId, GenreId, ReleaseId, ReportId, ReviewId, UserId};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    // auth
    Login,
    Register,
    Logout,
    CurrentUser,
    ForgotPassword,
    ResetPassword,

    // users
    Users,
    User(UserId),
    UpdateUser(UserId),
    BlockUser(UserId),
    UnblockUser(UserId),
    ChangeRole(UserId),

    // authors
    Authors,
    DeletedAuthors,
    Author(AuthorId),
    CreateAuthor,
    UpdateAuthor(AuthorId),
    DeleteAuthor(AuthorId),
    RestoreAuthor(AuthorId),
    FollowAuthor(AuthorId),
    UnfollowAuthor(AuthorId),
    FollowedAuthors,

    // releases
    Releases,
    SearchReleases,
    DeletedReleases,
    Release(ReleaseId),
    AuthorReleases(AuthorId),
    CreateRelease,
    UpdateRelease(ReleaseId),
    DeleteRelease(ReleaseId),
    RestoreRelease(ReleaseId),
    AddFavorite(ReleaseId),
    RemoveFavorite(ReleaseId),
    Favorites,

    // reviews
    Reviews,
    DeletedReviews,
    Review(ReviewId),
    ReleaseReviews(ReleaseId),
    UserReviews(UserId),
    CreateReview,
    UpdateReview(ReviewId),
    DeleteReview(ReviewId),
    RestoreReview(ReviewId),

    // likes
    MyLikes,
    LikeReview(ReviewId),
    UnlikeReview(ReviewId),

    // genres
    Genres,
    CreateGenre,
    UpdateGenre(GenreId),
    DeleteGenre(GenreId),

    // moderation
    Reports,
    CreateReport,
    ProcessReport(ReportId),
    Audit,
    ModeratorAudit(UserId),
}

impl Endpoint {
    pub fn method(&self) -> Method {
        use Endpoint::*;
        match self {
            Login | Register | Logout | ForgotPassword | ResetPassword => Method::Post,
            BlockUser(_) | UnblockUser(_) => Method::Post,
            CreateAuthor | RestoreAuthor(_) | FollowAuthor(_) => Method::Post,
            CreateRelease | RestoreRelease(_) | AddFavorite(_) => Method::Post,
            CreateReview | RestoreReview(_) | LikeReview(_) => Method::Post,
            CreateGenre | CreateReport | ProcessReport(_) => Method::Post,
            UpdateUser(_) | ChangeRole(_) | UpdateAuthor(_) | UpdateRelease(_) => Method::Put,
            UpdateReview(_) | UpdateGenre(_) => Method::Put,
            DeleteAuthor(_) | UnfollowAuthor(_) | DeleteRelease(_) | RemoveFavorite(_) => {
                Method::Delete
            }
            DeleteReview(_) | UnlikeReview(_) | DeleteGenre(_) => Method::Delete,
            CurrentUser | Users | User(_) | Authors | DeletedAuthors | Author(_)
            | FollowedAuthors | Releases | SearchReleases | DeletedReleases | Release(_)
            | AuthorReleases(_) | Favorites | Reviews | DeletedReviews | Review(_)
            | ReleaseReviews(_) | UserReviews(_) | MyLikes | Genres | Reports | Audit
            | ModeratorAudit(_) => Method::Get,
        }
    }

    pub fn path(&self) -> String {
        use Endpoint::*;
        match *self {
            Login => "/auth/login".into(),
            Register => "/auth/register".into(),
            Logout => "/auth/logout".into(),
            CurrentUser => "/auth/me".into(),
            ForgotPassword => "/auth/forgot-password".into(),
            ResetPassword => "/auth/reset-password".into(),

            Users => "/users".into(),
            User(id) | UpdateUser(id) => format!("/users/{id}"),
            BlockUser(id) => format!("/users/{id}/block"),
            UnblockUser(id) => format!("/users/{id}/unblock"),
            ChangeRole(id) => format!("/users/{id}/role"),

            Authors | CreateAuthor => "/authors".into(),
            DeletedAuthors => "/authors/deleted".into(),
            FollowedAuthors => "/authors/followed".into(),
            Author(id) | UpdateAuthor(id) | DeleteAuthor(id) => format!("/authors/{id}"),
            RestoreAuthor(id) => format!("/authors/{id}/restore"),
            FollowAuthor(id) | UnfollowAuthor(id) => format!("/authors/{id}/follow"),

            Releases | CreateRelease => "/releases".into(),
            SearchReleases => "/releases/search".into(),
            DeletedReleases => "/releases/deleted".into(),
            Favorites => "/releases/favorites".into(),
            Release(id) | UpdateRelease(id) | DeleteRelease(id) => format!("/releases/{id}"),
            AuthorReleases(author_id) => format!("/releases/author/{author_id}"),
            RestoreRelease(id) => format!("/releases/{id}/restore"),
            AddFavorite(id) | RemoveFavorite(id) => format!("/releases/{id}/favorite"),

            Reviews | CreateReview => "/reviews".into(),
            DeletedReviews => "/reviews/deleted".into(),
            Review(id) | UpdateReview(id) | DeleteReview(id) => format!("/reviews/{id}"),
            ReleaseReviews(release_id) => format!("/reviews/release/{release_id}"),
            UserReviews(user_id) => format!("/reviews/user/{user_id}"),
            RestoreReview(id) => format!("/reviews/{id}/restore"),

            MyLikes => "/likes/my".into(),
            LikeReview(id) | UnlikeReview(id) => format!("/reviews/{id}/like"),

            Genres | CreateGenre => "/genres".into(),
            UpdateGenre(id) | DeleteGenre(id) => format!("/genres/{id}"),

            Reports | CreateReport => "/reports".into(),
            ProcessReport(id) => format!("/reports/{id}/process"),
            Audit => "/audit".into(),
            ModeratorAudit(moderator_id) => format!("/audit/moderator/{moderator_id}"),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}
