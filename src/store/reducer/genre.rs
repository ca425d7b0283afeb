use super::super::action::GenreAction;
use super::super::collections::{append, remove, replace, replace_all};
use super::super::state::GenreState;
use super::{begin, fail, settle};

pub fn reduce(state: &mut GenreState, action: GenreAction) {
    match action {
        GenreAction::StartLoading => begin(&mut state.loading, &mut state.error),
        GenreAction::GenresLoaded(genres) => {
            replace_all(&mut state.genres, genres);
            settle(&mut state.loading, &mut state.error);
        }
        GenreAction::GenreCreated(genre) => {
            append(&mut state.genres, genre);
            settle(&mut state.loading, &mut state.error);
        }
        GenreAction::GenreUpdated(genre) => {
            replace(&mut state.genres, &genre);
            settle(&mut state.loading, &mut state.error);
        }
        GenreAction::GenreDeleted(id) => {
            remove(&mut state.genres, id);
            settle(&mut state.loading, &mut state.error);
        }
        GenreAction::RequestFailure(message) => {
            fail(&mut state.loading, &mut state.error, message)
        }
    }
}
