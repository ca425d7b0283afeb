use super::super::action::AuthorAction;
use super::super::collections::{
    append, bury, remove, replace, replace_all, replace_current, restore, take_current, upsert,
};
use super::super::state::AuthorState;
use super::{begin, fail, settle};

pub fn reduce(state: &mut AuthorState, action: AuthorAction) {
    match action {
        AuthorAction::StartLoading => begin(&mut state.loading, &mut state.error),
        AuthorAction::AuthorsLoaded(authors) => {
            replace_all(&mut state.authors, authors);
            settle(&mut state.loading, &mut state.error);
        }
        AuthorAction::DeletedAuthorsLoaded(authors) => {
            replace_all(&mut state.deleted, authors);
            settle(&mut state.loading, &mut state.error);
        }
        AuthorAction::AuthorLoaded(author) => {
            state.current = Some(author);
            settle(&mut state.loading, &mut state.error);
        }
        AuthorAction::AuthorCreated(author) => {
            append(&mut state.authors, author);
            settle(&mut state.loading, &mut state.error);
        }
        AuthorAction::AuthorUpdated(author) => {
            replace(&mut state.authors, &author);
            replace(&mut state.deleted, &author);
            replace(&mut state.followed, &author);
            replace_current(&mut state.current, &author);
            settle(&mut state.loading, &mut state.error);
        }
        AuthorAction::AuthorDeleted(id) => {
            let from_list = remove(&mut state.authors, id);
            let from_followed = remove(&mut state.followed, id);
            let from_current = take_current(&mut state.current, id);
            if let Some(author) = from_list.or(from_followed).or(from_current) {
                bury(&mut state.deleted, author);
            }
            settle(&mut state.loading, &mut state.error);
        }
        AuthorAction::AuthorRestored(author) => {
            restore(&mut state.authors, &mut state.deleted, author);
            settle(&mut state.loading, &mut state.error);
        }
        AuthorAction::FollowedLoaded(authors) => {
            replace_all(&mut state.followed, authors);
            settle(&mut state.loading, &mut state.error);
        }
        AuthorAction::AuthorFollowed(author) => {
            // the server sends back the new follower count
            replace(&mut state.authors, &author);
            replace_current(&mut state.current, &author);
            upsert(&mut state.followed, author);
            settle(&mut state.loading, &mut state.error);
        }
        AuthorAction::AuthorUnfollowed(id) => {
            remove(&mut state.followed, id);
            settle(&mut state.loading, &mut state.error);
        }
        AuthorAction::ClearCurrent => state.current = None,
        AuthorAction::RequestFailure(message) => {
            fail(&mut state.loading, &mut state.error, message)
        }
    }
}
