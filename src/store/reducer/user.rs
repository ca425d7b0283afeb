use super::super::action::UserAction;
use super::super::collections::{replace, replace_all, replace_current};
use super::super::state::UserState;
use super::{begin, fail, settle};

pub fn reduce(state: &mut UserState, action: UserAction) {
    match action {
        UserAction::StartLoading => begin(&mut state.loading, &mut state.error),
        UserAction::UsersLoaded(users) => {
            replace_all(&mut state.users, users);
            settle(&mut state.loading, &mut state.error);
        }
        UserAction::ProfileLoaded(user) => {
            state.profile = Some(user);
            settle(&mut state.loading, &mut state.error);
        }
        UserAction::UserUpdated(user) => {
            replace(&mut state.users, &user);
            replace_current(&mut state.profile, &user);
            settle(&mut state.loading, &mut state.error);
        }
        UserAction::ClearProfile => state.profile = None,
        UserAction::RequestFailure(message) => {
            fail(&mut state.loading, &mut state.error, message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::user;
    use super::*;
    use std::sync::Arc;

    #[test]
    fn update_replaces_in_list_and_profile() {
        let mut state = UserState::default();
        reduce(
            &mut state,
            UserAction::UsersLoaded(vec![user(1, "ann"), user(2, "bob")]),
        );
        reduce(&mut state, UserAction::ProfileLoaded(user(2, "bob")));

        let blocked = crate::domain::User {
            is_blocked: true,
            ..user(2, "bob")
        };
        reduce(&mut state, UserAction::UserUpdated(blocked.clone()));

        assert_eq!(state.users[1], blocked);
        assert_eq!(state.profile, Some(blocked));
    }

    #[test]
    fn update_for_absent_user_is_harmless() {
        let mut state = UserState::default();
        reduce(&mut state, UserAction::UsersLoaded(vec![user(1, "ann")]));
        reduce(&mut state, UserAction::ProfileLoaded(user(1, "ann")));
        let users = Arc::clone(&state.users);

        reduce(&mut state, UserAction::UserUpdated(user(7, "ghost")));

        assert!(Arc::ptr_eq(&users, &state.users));
        assert_eq!(state.profile, Some(user(1, "ann")));
    }

    #[test]
    fn clear_profile_leaves_status_alone() {
        let mut state = UserState {
            profile: Some(user(1, "ann")),
            loading: true,
            error: Some("x".into()),
            ..Default::default()
        };
        reduce(&mut state, UserAction::ClearProfile);
        assert!(state.profile.is_none());
        assert!(state.loading);
        assert_eq!(state.error.as_deref(), Some("x"));
    }
}
