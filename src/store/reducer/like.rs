use super::super::action::LikeAction;
use super::super::collections::{append, replace_all};
use super::super::state::LikeState;
use super::{begin, fail, settle};
use std::sync::Arc;

pub fn reduce(state: &mut LikeState, action: LikeAction) {
    match action {
        LikeAction::StartLoading => begin(&mut state.loading, &mut state.error),
        LikeAction::LikesLoaded(likes) => {
            replace_all(&mut state.likes, likes);
            settle(&mut state.loading, &mut state.error);
        }
        LikeAction::LikeSet(like) => {
            // at most one reaction per review
            match state.likes.iter().position(|l| l.review_id == like.review_id) {
                Some(pos) if state.likes[pos] == like => {}
                Some(pos) => Arc::make_mut(&mut state.likes)[pos] = like,
                None => append(&mut state.likes, like),
            }
            settle(&mut state.loading, &mut state.error);
        }
        LikeAction::LikeRemoved(review_id) => {
            if let Some(pos) = state.likes.iter().position(|l| l.review_id == review_id) {
                Arc::make_mut(&mut state.likes).remove(pos);
            }
            settle(&mut state.loading, &mut state.error);
        }
        LikeAction::RequestFailure(message) => {
            fail(&mut state.loading, &mut state.error, message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::like;
    use super::*;
    use crate::domain::LikeKind;

    #[test]
    fn switching_to_dislike_replaces_the_row() {
        let mut state = LikeState::default();
        reduce(&mut state, LikeAction::LikeSet(like(1, 5, LikeKind::Like)));
        reduce(&mut state, LikeAction::LikeSet(like(2, 5, LikeKind::Dislike)));

        assert_eq!(state.likes.len(), 1);
        assert_eq!(state.like_for(5).map(|l| l.kind), Some(LikeKind::Dislike));
    }

    #[test]
    fn remove_by_review() {
        let mut state = LikeState::default();
        reduce(
            &mut state,
            LikeAction::LikesLoaded(vec![like(1, 5, LikeKind::Like), like(2, 6, LikeKind::Like)]),
        );
        reduce(&mut state, LikeAction::LikeRemoved(5));
        assert!(state.like_for(5).is_none());
        assert!(state.like_for(6).is_some());

        let before = Arc::clone(&state.likes);
        reduce(&mut state, LikeAction::LikeRemoved(42));
        assert!(Arc::ptr_eq(&before, &state.likes));
    }
}
