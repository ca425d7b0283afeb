pub mod audit;
pub mod author;
pub mod genre;
pub mod like;
pub mod release;
pub mod report;
pub mod review;
pub mod session;
pub mod user;

use super::action::{Action, SessionAction};
use super::state::AppState;

/// Routes an action to its slice. Nothing here crosses slices except logout,
/// which drops the signed-in user's likes, favorites and follows.
pub fn reduce(state: &mut AppState, action: Action) {
    match action {
        Action::Session(action) => {
            let logged_out = matches!(action, SessionAction::LoggedOut);
            session::reduce(&mut state.session, action);
            if logged_out {
                clear_session_scoped(state);
            }
        }
        Action::User(action) => user::reduce(&mut state.user, action),
        Action::Author(action) => author::reduce(&mut state.author, action),
        Action::Release(action) => release::reduce(&mut state.release, action),
        Action::Review(action) => review::reduce(&mut state.review, action),
        Action::Genre(action) => genre::reduce(&mut state.genre, action),
        Action::Like(action) => like::reduce(&mut state.like, action),
        Action::Report(action) => report::reduce(&mut state.report, action),
        Action::Audit(action) => audit::reduce(&mut state.audit, action),
    }
}

fn clear_session_scoped(state: &mut AppState) {
    state.like = Default::default();
    if !state.release.favorites.is_empty() {
        state.release.favorites = Default::default();
    }
    if !state.author.followed.is_empty() {
        state.author.followed = Default::default();
    }
}

/// `startLoading`: only the two status fields move.
pub(crate) fn begin(loading: &mut bool, error: &mut Option<String>) {
    *loading = true;
    *error = None;
}

/// Status fields after any success transition.
pub(crate) fn settle(loading: &mut bool, error: &mut Option<String>) {
    *loading = false;
    *error = None;
}

/// `requestFailure`: never touches data.
pub(crate) fn fail(loading: &mut bool, error: &mut Option<String>, message: String) {
    *loading = false;
    *error = Some(message);
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::domain::{
        Author, AuthorRef, Genre, Like, LikeKind, Release, Report, ReportStatus, ReportTarget,
        Review, Scores, User, UserRole,
    };

    pub fn user(id: i64, name: &str) -> User {
        User {
            id,
            username: name.into(),
            role: UserRole::User,
            ..Default::default()
        }
    }

    pub fn author(id: i64, name: &str) -> Author {
        Author {
            id,
            name: name.into(),
            is_artist: true,
            ..Default::default()
        }
    }

    pub fn release(id: i64, title: &str, author_ids: &[i64]) -> Release {
        Release {
            id,
            title: title.into(),
            authors: author_ids
                .iter()
                .map(|&id| AuthorRef {
                    id,
                    name: format!("author-{id}"),
                })
                .collect(),
            genres: vec![Genre {
                id: 1,
                name: "rap".into(),
            }],
            ..Default::default()
        }
    }

    pub fn review(id: i64, release_id: i64, user_id: i64) -> Review {
        Review {
            id,
            user_id,
            release_id,
            title: Some(format!("review {id}")),
            text: None,
            scores: Scores::from_raw(7, 7, 7, 7, 7).unwrap(),
            like_count: 0,
            dislike_count: 0,
            is_deleted: false,
            created_at: None,
        }
    }

    pub fn like(id: i64, review_id: i64, kind: LikeKind) -> Like {
        Like {
            id,
            user_id: 1,
            review_id,
            kind,
        }
    }

    pub fn report(id: i64, status: ReportStatus) -> Report {
        Report {
            id,
            reporter_id: 1,
            target_type: ReportTarget::Review,
            target_id: 10,
            reason: "spam".into(),
            status,
            moderator_id: None,
            created_at: None,
        }
    }
}
