use super::super::action::ReleaseAction;
use super::super::collections::{
    append, append_to_key, bury, merge_key, remove, remove_from_keys, replace, replace_all,
    replace_current, replace_in_keys, restore, take_current, upsert,
};
use super::super::state::ReleaseState;
use super::{begin, fail, settle};
use std::collections::HashSet;
use std::sync::Arc;

pub fn reduce(state: &mut ReleaseState, action: ReleaseAction) {
    match action {
        ReleaseAction::StartLoading => begin(&mut state.loading, &mut state.error),
        ReleaseAction::ReleasesLoaded(releases) => {
            replace_all(&mut state.releases, releases);
            settle(&mut state.loading, &mut state.error);
        }
        ReleaseAction::DeletedReleasesLoaded(releases) => {
            replace_all(&mut state.deleted, releases);
            settle(&mut state.loading, &mut state.error);
        }
        ReleaseAction::SearchResultsLoaded(releases) => {
            replace_all(&mut state.search_results, releases);
            settle(&mut state.loading, &mut state.error);
        }
        ReleaseAction::ReleaseLoaded(release) => {
            state.current = Some(release);
            settle(&mut state.loading, &mut state.error);
        }
        ReleaseAction::AuthorReleasesLoaded {
            author_id,
            releases,
        } => {
            merge_key(&mut state.by_author, author_id, releases);
            settle(&mut state.loading, &mut state.error);
        }
        ReleaseAction::ReleaseCreated(release) => {
            // an author credited twice still gets one entry
            let mut seen = HashSet::new();
            for author in &release.authors {
                if seen.insert(author.id) {
                    append_to_key(&mut state.by_author, &author.id, release.clone());
                }
            }
            append(&mut state.releases, release);
            settle(&mut state.loading, &mut state.error);
        }
        ReleaseAction::ReleaseUpdated(release) => {
            replace(&mut state.releases, &release);
            replace(&mut state.deleted, &release);
            replace(&mut state.search_results, &release);
            replace(&mut state.favorites, &release);
            replace_in_keys(&mut state.by_author, &release);
            replace_current(&mut state.current, &release);
            settle(&mut state.loading, &mut state.error);
        }
        ReleaseAction::ReleaseDeleted(id) => {
            let found = [
                remove(&mut state.releases, id),
                remove(&mut state.search_results, id),
                remove(&mut state.favorites, id),
                remove_from_keys(&mut state.by_author, id),
                take_current(&mut state.current, id),
            ]
            .into_iter()
            .flatten()
            .next();
            if let Some(release) = found {
                bury(&mut state.deleted, release);
            }
            settle(&mut state.loading, &mut state.error);
        }
        ReleaseAction::ReleaseRestored(release) => {
            for author in &release.authors {
                if let Some(list) = state.by_author.get_mut(&author.id) {
                    let mut active = release.clone();
                    active.is_deleted = false;
                    upsert(list, active);
                }
            }
            restore(&mut state.releases, &mut state.deleted, release);
            settle(&mut state.loading, &mut state.error);
        }
        ReleaseAction::FavoritesLoaded(releases) => {
            replace_all(&mut state.favorites, releases);
            settle(&mut state.loading, &mut state.error);
        }
        ReleaseAction::FavoriteAdded(release) => {
            upsert(&mut state.favorites, release);
            settle(&mut state.loading, &mut state.error);
        }
        ReleaseAction::FavoriteRemoved(id) => {
            remove(&mut state.favorites, id);
            settle(&mut state.loading, &mut state.error);
        }
        ReleaseAction::ClearCurrent => state.current = None,
        ReleaseAction::ClearSearch => {
            if !state.search_results.is_empty() {
                state.search_results = Arc::default();
            }
        }
        ReleaseAction::RequestFailure(message) => {
            fail(&mut state.loading, &mut state.error, message)
        }
    }
}
