//! Property checks over the root reducer.

use proptest::prelude::*;
use soundscore::domain::{Genre, Release};
use soundscore::store::{Action, AppState, GenreAction, ReleaseAction, Slice, reduce};

const SLICES: [Slice; 9] = [
    Slice::Session,
    Slice::User,
    Slice::Author,
    Slice::Release,
    Slice::Review,
    Slice::Genre,
    Slice::Like,
    Slice::Report,
    Slice::Audit,
];

fn seeded(release_ids: &[i64]) -> AppState {
    let mut state = AppState::default();
    let releases = release_ids
        .iter()
        .map(|&id| Release {
            id,
            title: format!("Release {id}"),
            ..Release::default()
        })
        .collect();
    reduce(&mut state, Action::Release(ReleaseAction::ReleasesLoaded(releases)));
    reduce(
        &mut state,
        Action::Genre(GenreAction::GenresLoaded(vec![Genre {
            id: 1,
            name: "Jazz".into(),
        }])),
    );
    state
}

/// Clears every status field so two states can be compared on data alone.
fn data_only(mut state: AppState) -> AppState {
    for slice in SLICES {
        reduce(&mut state, Action::start_loading(slice));
    }
    state
}

proptest! {
    #[test]
    fn failure_never_touches_data(
        ids in proptest::collection::vec(1i64..500, 0..20),
        slice_index in 0usize..SLICES.len(),
        message in "[a-zA-Z ]{1,40}",
    ) {
        let slice = SLICES[slice_index];
        let before = seeded(&ids);
        let mut after = before.clone();

        reduce(&mut after, Action::start_loading(slice));
        reduce(&mut after, Action::failure(slice, message.clone()));

        prop_assert_eq!(data_only(after.clone()), data_only(before));
        let error = match slice {
            Slice::Session => after.session.error,
            Slice::User => after.user.error,
            Slice::Author => after.author.error,
            Slice::Release => after.release.error,
            Slice::Review => after.review.error,
            Slice::Genre => after.genre.error,
            Slice::Like => after.like.error,
            Slice::Report => after.report.error,
            Slice::Audit => after.audit.error,
        };
        prop_assert_eq!(error, Some(message));
    }

    #[test]
    fn deleting_absent_release_changes_nothing(
        ids in proptest::collection::vec(1i64..100, 0..20),
        missing in 100i64..200,
    ) {
        let before = seeded(&ids);
        let mut after = before.clone();

        reduce(&mut after, Action::Release(ReleaseAction::ReleaseDeleted(missing)));

        prop_assert_eq!(&after.release.releases, &before.release.releases);
        prop_assert!(after.release.deleted.is_empty());
    }

    #[test]
    fn reloading_same_list_is_idempotent(ids in proptest::collection::vec(1i64..500, 0..20)) {
        let once = seeded(&ids);
        let mut twice = once.clone();
        let releases = once.release.releases.as_ref().clone();

        reduce(&mut twice, Action::Release(ReleaseAction::ReleasesLoaded(releases)));

        prop_assert_eq!(twice, once);
    }
}
