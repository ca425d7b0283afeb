use super::super::action::ReviewAction;
use super::super::collections::{
    append, append_to_key, bury, merge_key, remove, remove_from_keys, replace, replace_all,
    replace_current, replace_in_keys, restore, take_current, upsert,
};
use super::super::state::ReviewState;
use super::{begin, fail, settle};

pub fn reduce(state: &mut ReviewState, action: ReviewAction) {
    match action {
        ReviewAction::StartLoading => begin(&mut state.loading, &mut state.error),
        ReviewAction::ReviewsLoaded(reviews) => {
            replace_all(&mut state.reviews, reviews);
            settle(&mut state.loading, &mut state.error);
        }
        ReviewAction::DeletedReviewsLoaded(reviews) => {
            replace_all(&mut state.deleted, reviews);
            settle(&mut state.loading, &mut state.error);
        }
        ReviewAction::ReviewLoaded(review) => {
            state.current = Some(review);
            settle(&mut state.loading, &mut state.error);
        }
        ReviewAction::ReleaseReviewsLoaded {
            release_id,
            reviews,
        } => {
            merge_key(&mut state.release_reviews, release_id, reviews);
            settle(&mut state.loading, &mut state.error);
        }
        ReviewAction::UserReviewsLoaded { user_id, reviews } => {
            merge_key(&mut state.user_reviews, user_id, reviews);
            settle(&mut state.loading, &mut state.error);
        }
        ReviewAction::ReviewCreated(review) => {
            append_to_key(&mut state.release_reviews, &review.release_id, review.clone());
            append_to_key(&mut state.user_reviews, &review.user_id, review.clone());
            append(&mut state.reviews, review);
            settle(&mut state.loading, &mut state.error);
        }
        ReviewAction::ReviewUpdated(review) => {
            replace(&mut state.reviews, &review);
            replace(&mut state.deleted, &review);
            replace_in_keys(&mut state.release_reviews, &review);
            replace_in_keys(&mut state.user_reviews, &review);
            replace_current(&mut state.current, &review);
            settle(&mut state.loading, &mut state.error);
        }
        ReviewAction::ReviewDeleted(id) => {
            let found = [
                remove(&mut state.reviews, id),
                remove_from_keys(&mut state.release_reviews, id),
                remove_from_keys(&mut state.user_reviews, id),
                take_current(&mut state.current, id),
            ]
            .into_iter()
            .flatten()
            .next();
            if let Some(review) = found {
                bury(&mut state.deleted, review);
            }
            settle(&mut state.loading, &mut state.error);
        }
        ReviewAction::ReviewRestored(review) => {
            let mut active = review.clone();
            active.is_deleted = false;
            if let Some(list) = state.release_reviews.get_mut(&review.release_id) {
                upsert(list, active.clone());
            }
            if let Some(list) = state.user_reviews.get_mut(&review.user_id) {
                upsert(list, active);
            }
            restore(&mut state.reviews, &mut state.deleted, review);
            settle(&mut state.loading, &mut state.error);
        }
        ReviewAction::ClearCurrent => state.current = None,
        ReviewAction::RequestFailure(message) => {
            fail(&mut state.loading, &mut state.error, message)
        }
    }
}
