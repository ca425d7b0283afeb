use super::{Client, perform};
use crate::domain::{Like, LikeKind, ReviewId};
use crate::infra::endpoints::Endpoint;
use crate::infra::http::{ApiError, ApiRequest, execute, fetch};
use crate::store::{Action, LikeAction, Slice};
use serde_json::json;

pub async fn fetch_my_likes(client: &Client) -> Result<Vec<Like>, ApiError> {
    perform(
        client,
        Slice::Like,
        "fetch likes",
        fetch(client.transport(), ApiRequest::to(Endpoint::MyLikes)),
        |likes: &Vec<Like>| Action::Like(LikeAction::LikesLoaded(likes.clone())),
    )
    .await
}

/// Likes or dislikes a review, replacing any earlier reaction.
pub async fn like_review(
    client: &Client,
    review_id: ReviewId,
    kind: LikeKind,
) -> Result<Like, ApiError> {
    perform(
        client,
        Slice::Like,
        "like review",
        async {
            let request = ApiRequest::to(Endpoint::LikeReview(review_id)).json(&json!({ "type": kind }))?;
            fetch(client.transport(), request).await
        },
        |like: &Like| Action::Like(LikeAction::LikeSet(like.clone())),
    )
    .await
}

pub async fn remove_like(client: &Client, review_id: ReviewId) -> Result<(), ApiError> {
    perform(
        client,
        Slice::Like,
        "remove like",
        execute(
            client.transport(),
            ApiRequest::to(Endpoint::UnlikeReview(review_id)),
        ),
        |_| Action::Like(LikeAction::LikeRemoved(review_id)),
    )
    .await
}
