//! Operations driven end to end against a scripted transport.

mod support;

use serde_json::json;
use soundscore::domain::{LikeKind, ReportStatus, ReviewDraft, UserRole};
use soundscore::infra::endpoints::Method;
use soundscore::infra::http::ApiError;
use soundscore::operations::{auth, like, release, report, review, user};
use soundscore::operations::release::ReleaseFilter;
use std::sync::Arc;
use support::*;

#[tokio::test]
async fn login_stores_session_and_installs_token() {
    let transport = FakeTransport::new();
    transport.respond(
        Method::Post,
        "/auth/login",
        json!({ "token": "tok-1", "user": moderator_json(5) }),
    );
    let client = client_with(&transport);

    let session = auth::login(&client, "mod@example.com", "secret").await.unwrap();

    assert_eq!(session.token, "tok-1");
    assert_eq!(transport.token().as_deref(), Some("tok-1"));
    let state = client.store().snapshot();
    assert!(state.session.is_authenticated());
    assert_eq!(state.session.user_id(), Some(5));
    assert!(state.session.can_moderate());
    assert!(!state.session.loading);
    assert_eq!(state.session.error, None);

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].body,
        Some(json!({ "email": "mod@example.com", "password": "secret" }))
    );
}

#[tokio::test]
async fn rejected_login_records_message_and_returns_error() {
    let transport = FakeTransport::new();
    transport.fail(
        Method::Post,
        "/auth/login",
        ApiError::from_status(401, br#"{"message":"Bad credentials"}"#),
    );
    let client = client_with(&transport);

    let err = auth::login(&client, "a@b.c", "wrong").await.unwrap_err();

    assert!(err.is_unauthorized());
    let session = client.store().select(|s| s.session.clone());
    assert_eq!(session.error.as_deref(), Some("Bad credentials"));
    assert!(!session.loading);
    assert!(!session.is_authenticated());
    assert_eq!(transport.token(), None);
}

#[tokio::test]
async fn empty_credentials_never_reach_the_server() {
    let transport = FakeTransport::new();
    let client = client_with(&transport);

    let err = auth::login(&client, "  ", "secret").await.unwrap_err();

    assert!(matches!(err, ApiError::Validation { status: None, .. }));
    assert!(transport.sent().is_empty());
    assert!(client.store().select(|s| s.session.error.is_some()));
}

#[tokio::test]
async fn logout_with_expired_token_still_clears_session_data() {
    let transport = FakeTransport::new();
    transport.respond(
        Method::Post,
        "/auth/login",
        json!({ "token": "tok", "user": user_json(1, "ann") }),
    );
    transport.respond(Method::Get, "/releases/favorites", json!([release_json(4, "Fav")]));
    transport.fail(
        Method::Post,
        "/auth/logout",
        ApiError::Unauthorized {
            status: 401,
            message: "expired".into(),
        },
    );
    let client = client_with(&transport);

    auth::login(&client, "ann@example.com", "pw").await.unwrap();
    release::fetch_favorites(&client).await.unwrap();
    assert!(client.store().select(|s| s.release.is_favorite(4)));

    auth::logout(&client).await.unwrap();

    let state = client.store().snapshot();
    assert!(!state.session.is_authenticated());
    assert!(state.release.favorites.is_empty());
    assert_eq!(transport.token(), None);
}

#[tokio::test]
async fn concurrent_profile_fetches_keep_the_last_to_settle() {
    let transport = FakeTransport::new();
    let release_first = transport.respond_later(Method::Get, "/users/1", user_json(1, "first"));
    transport.respond(Method::Get, "/users/2", user_json(2, "second"));
    let client = client_with(&transport);

    let (first, second) = futures::join!(user::fetch_user(&client, 1), async {
        let second = user::fetch_user(&client, 2).await;
        let _ = release_first.send(());
        second
    });

    assert_eq!(first.unwrap().id, 1);
    assert_eq!(second.unwrap().id, 2);
    let profile = client.store().select(|s| s.user.profile.clone());
    assert_eq!(profile.map(|u| u.id), Some(1));
    assert!(!client.store().select(|s| s.user.loading));
}

#[tokio::test]
async fn role_change_replaces_user_in_listing() {
    let transport = FakeTransport::new();
    transport.respond(
        Method::Get,
        "/users",
        json!([user_json(1, "ann"), user_json(2, "bob")]),
    );
    transport.respond(
        Method::Put,
        "/users/2/role",
        json!({ "id": 2, "username": "bob", "role": "ADMIN" }),
    );
    let client = client_with(&transport);

    user::fetch_users(&client).await.unwrap();
    user::change_role(&client, 2, UserRole::Admin).await.unwrap();

    let users = client.store().select(|s| s.user.users.clone());
    assert_eq!(users.len(), 2);
    assert_eq!(users[1].role, UserRole::Admin);
    assert_eq!(
        transport.sent().last().and_then(|r| r.body.clone()),
        Some(json!({ "role": "ADMIN" }))
    );
}

#[tokio::test]
async fn release_filter_is_sent_as_query() {
    let transport = FakeTransport::new();
    transport.respond(Method::Get, "/releases", json!([release_json(1, "One")]));
    let client = client_with(&transport);

    let filter = ReleaseFilter {
        genre_id: Some(3),
        release_type: None,
        page: Some(2),
    };
    let releases = release::fetch_releases(&client, &filter).await.unwrap();

    assert_eq!(releases.len(), 1);
    let sent = transport.sent();
    assert!(sent[0].query.contains(&("genreId".to_string(), "3".to_string())));
    assert!(sent[0].query.contains(&("page".to_string(), "2".to_string())));
}

#[tokio::test]
async fn release_reviews_are_kept_per_release() {
    let transport = FakeTransport::new();
    transport.respond(
        Method::Get,
        "/reviews/release/10",
        json!([review_json(1, 10, 1), review_json(2, 10, 2)]),
    );
    transport.respond(
        Method::Get,
        "/reviews/release/11",
        json!([review_json(3, 11, 1)]),
    );
    let client = client_with(&transport);

    review::fetch_release_reviews(&client, 10).await.unwrap();
    review::fetch_release_reviews(&client, 11).await.unwrap();

    let state = client.store().snapshot();
    assert_eq!(state.review.for_release(10).map(|r| r.len()), Some(2));
    assert_eq!(state.review.for_release(11).map(|r| r.len()), Some(1));
    let first = &state.review.for_release(10).unwrap()[0];
    assert_eq!(first.average_score(), 8.0);
}

#[tokio::test]
async fn out_of_range_score_fails_locally() {
    let transport = FakeTransport::new();
    let client = client_with(&transport);
    let draft = ReviewDraft {
        release_id: 10,
        title: Some("Loud".into()),
        text: None,
        lyrics: 11,
        structure: 5,
        production: 5,
        individuality: 5,
        atmosphere: 5,
    };

    let err = review::create_review(&client, draft).await.unwrap_err();

    assert!(matches!(err, ApiError::Validation { status: None, .. }));
    assert!(err.message().contains("lyrics"));
    assert!(transport.sent().is_empty());
    let state = client.store().select(|s| s.review.clone());
    assert!(state.reviews.is_empty());
    assert!(state.error.is_some());
    assert!(!state.loading);
}

#[tokio::test]
async fn created_review_lands_in_list() {
    let transport = FakeTransport::new();
    transport.respond(Method::Post, "/reviews", review_json(9, 10, 1));
    let client = client_with(&transport);
    let draft = ReviewDraft {
        release_id: 10,
        title: Some("Solid".into()),
        text: None,
        lyrics: 8,
        structure: 7,
        production: 9,
        individuality: 6,
        atmosphere: 10,
    };

    let created = review::create_review(&client, draft).await.unwrap();

    assert_eq!(created.id, 9);
    let reviews = client.store().select(|s| s.review.reviews.clone());
    assert_eq!(reviews.iter().map(|r| r.id).collect::<Vec<_>>(), vec![9]);
    let body = transport.sent()[0].body.clone().unwrap();
    assert_eq!(body["scores"]["production"], json!(9));
}

#[tokio::test]
async fn deleted_review_can_be_restored() {
    let transport = FakeTransport::new();
    transport.respond(Method::Get, "/reviews", json!([review_json(3, 10, 1)]));
    transport.respond(Method::Delete, "/reviews/3", serde_json::Value::Null);
    transport.respond(Method::Post, "/reviews/3/restore", review_json(3, 10, 1));
    let client = client_with(&transport);

    review::fetch_reviews(&client).await.unwrap();
    review::delete_review(&client, 3).await.unwrap();
    let state = client.store().select(|s| s.review.clone());
    assert!(state.reviews.is_empty());
    assert_eq!(state.deleted.len(), 1);
    assert!(state.deleted[0].is_deleted);

    review::restore_review(&client, 3).await.unwrap();
    let state = client.store().select(|s| s.review.clone());
    assert_eq!(state.reviews.len(), 1);
    assert!(state.deleted.is_empty());
}

#[tokio::test]
async fn switching_reaction_replaces_the_earlier_one() {
    let transport = FakeTransport::new();
    transport.respond(
        Method::Post,
        "/reviews/3/like",
        json!({ "id": 1, "userId": 1, "reviewId": 3, "type": "LIKE" }),
    );
    transport.respond(
        Method::Post,
        "/reviews/3/like",
        json!({ "id": 2, "userId": 1, "reviewId": 3, "type": "DISLIKE" }),
    );
    let client = client_with(&transport);

    like::like_review(&client, 3, LikeKind::Like).await.unwrap();
    like::like_review(&client, 3, LikeKind::Dislike).await.unwrap();

    let likes = client.store().select(|s| s.like.likes.clone());
    assert_eq!(likes.len(), 1);
    assert_eq!(likes[0].kind, LikeKind::Dislike);
}

#[tokio::test]
async fn settled_report_is_not_processed_again() {
    let transport = FakeTransport::new();
    transport.respond(
        Method::Get,
        "/reports",
        json!([report_json(1, "PENDING"), report_json(2, "RESOLVED")]),
    );
    transport.respond(
        Method::Post,
        "/reports/1/process",
        report_json(1, "REJECTED"),
    );
    let client = client_with(&transport);

    report::fetch_reports(&client, None).await.unwrap();

    let err = report::process_report(&client, 2, ReportStatus::Rejected)
        .await
        .unwrap_err();
    assert!(err.message().contains("RESOLVED"));

    let processed = report::process_report(&client, 1, ReportStatus::Rejected)
        .await
        .unwrap();
    assert_eq!(processed.status, ReportStatus::Rejected);

    let state = client.store().select(|s| s.report.clone());
    assert_eq!(state.pending().count(), 0);
    assert_eq!(state.error, None);
    // Only the listing and the one accepted transition went out.
    assert_eq!(transport.sent().len(), 2);
}

#[tokio::test]
async fn server_failure_keeps_existing_data() {
    let transport = FakeTransport::new();
    transport.respond(
        Method::Get,
        "/releases",
        json!([release_json(1, "One"), release_json(2, "Two")]),
    );
    transport.fail(
        Method::Get,
        "/releases",
        ApiError::from_status(500, b"upstream down"),
    );
    let client = client_with(&transport);

    release::fetch_releases(&client, &ReleaseFilter::default())
        .await
        .unwrap();
    let before = client.store().select(|s| s.release.releases.clone());

    let err = release::fetch_releases(&client, &ReleaseFilter::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    let state = client.store().select(|s| s.release.clone());
    assert!(Arc::ptr_eq(&before, &state.releases));
    assert_eq!(
        state.error.as_deref(),
        Some("Request failed with status 500: upstream down")
    );
}
