use super::super::action::SessionAction;
use super::super::state::SessionState;
use super::{begin, fail, settle};

pub fn reduce(state: &mut SessionState, action: SessionAction) {
    match action {
        SessionAction::StartLoading => begin(&mut state.loading, &mut state.error),
        SessionAction::LoggedIn { user, token } | SessionAction::Registered { user, token } => {
            state.user = Some(user);
            state.token = Some(token);
            state.reset_requested = false;
            settle(&mut state.loading, &mut state.error);
        }
        SessionAction::CurrentUserLoaded(user) => {
            state.user = Some(user);
            settle(&mut state.loading, &mut state.error);
        }
        SessionAction::LoggedOut => *state = SessionState::default(),
        SessionAction::PasswordResetRequested => {
            state.reset_requested = true;
            settle(&mut state.loading, &mut state.error);
        }
        SessionAction::PasswordResetCompleted => {
            state.reset_requested = false;
            settle(&mut state.loading, &mut state.error);
        }
        SessionAction::RequestFailure(message) => {
            fail(&mut state.loading, &mut state.error, message)
        }
    }
}
