use super::{Client, perform};
use crate::domain::{ReleaseId, Review, ReviewDraft, ReviewId, UserId};
use crate::infra::endpoints::Endpoint;
use crate::infra::http::{ApiError, ApiRequest, execute, fetch};
use crate::store::{Action, ReviewAction, Slice};

pub async fn fetch_reviews(client: &Client) -> Result<Vec<Review>, ApiError> {
    perform(
        client,
        Slice::Review,
        "fetch reviews",
        fetch(client.transport(), ApiRequest::to(Endpoint::Reviews)),
        |reviews: &Vec<Review>| Action::Review(ReviewAction::ReviewsLoaded(reviews.clone())),
    )
    .await
}

pub async fn fetch_deleted_reviews(client: &Client) -> Result<Vec<Review>, ApiError> {
    perform(
        client,
        Slice::Review,
        "fetch deleted reviews",
        fetch(client.transport(), ApiRequest::to(Endpoint::DeletedReviews)),
        |reviews: &Vec<Review>| {
            Action::Review(ReviewAction::DeletedReviewsLoaded(reviews.clone()))
        },
    )
    .await
}

pub async fn fetch_review(client: &Client, id: ReviewId) -> Result<Review, ApiError> {
    perform(
        client,
        Slice::Review,
        "fetch review",
        fetch(client.transport(), ApiRequest::to(Endpoint::Review(id))),
        |review: &Review| Action::Review(ReviewAction::ReviewLoaded(review.clone())),
    )
    .await
}

pub async fn fetch_release_reviews(
    client: &Client,
    release_id: ReleaseId,
) -> Result<Vec<Review>, ApiError> {
    perform(
        client,
        Slice::Review,
        "fetch release reviews",
        fetch(
            client.transport(),
            ApiRequest::to(Endpoint::ReleaseReviews(release_id)),
        ),
        |reviews: &Vec<Review>| {
            Action::Review(ReviewAction::ReleaseReviewsLoaded {
                release_id,
                reviews: reviews.clone(),
            })
        },
    )
    .await
}

pub async fn fetch_user_reviews(client: &Client, user_id: UserId) -> Result<Vec<Review>, ApiError> {
    perform(
        client,
        Slice::Review,
        "fetch user reviews",
        fetch(client.transport(), ApiRequest::to(Endpoint::UserReviews(user_id))),
        |reviews: &Vec<Review>| {
            Action::Review(ReviewAction::UserReviewsLoaded {
                user_id,
                reviews: reviews.clone(),
            })
        },
    )
    .await
}

/// Scores are checked locally first; an out-of-range score never reaches
/// the server but is reported the same way as a rejected one.
pub async fn create_review(client: &Client, draft: ReviewDraft) -> Result<Review, ApiError> {
    perform(
        client,
        Slice::Review,
        "create review",
        async {
            let payload = draft.into_payload()?;
            fetch(
                client.transport(),
                ApiRequest::to(Endpoint::CreateReview).json(&payload)?,
            )
            .await
        },
        |review: &Review| Action::Review(ReviewAction::ReviewCreated(review.clone())),
    )
    .await
}

pub async fn update_review(
    client: &Client,
    id: ReviewId,
    draft: ReviewDraft,
) -> Result<Review, ApiError> {
    perform(
        client,
        Slice::Review,
        "update review",
        async {
            let payload = draft.into_payload()?;
            fetch(
                client.transport(),
                ApiRequest::to(Endpoint::UpdateReview(id)).json(&payload)?,
            )
            .await
        },
        |review: &Review| Action::Review(ReviewAction::ReviewUpdated(review.clone())),
    )
    .await
}

pub async fn delete_review(client: &Client, id: ReviewId) -> Result<(), ApiError> {
    perform(
        client,
        Slice::Review,
        "delete review",
        execute(client.transport(), ApiRequest::to(Endpoint::DeleteReview(id))),
        |_| Action::Review(ReviewAction::ReviewDeleted(id)),
    )
    .await
}

pub async fn restore_review(client: &Client, id: ReviewId) -> Result<Review, ApiError> {
    perform(
        client,
        Slice::Review,
        "restore review",
        fetch(client.transport(), ApiRequest::to(Endpoint::RestoreReview(id))),
        |review: &Review| Action::Review(ReviewAction::ReviewRestored(review.clone())),
    )
    .await
}
