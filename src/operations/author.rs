use super::{Client, perform, require_text};
use crate::domain::{Author, AuthorDraft, AuthorId};
use crate::infra::endpoints::Endpoint;
use crate::infra::http::{ApiError, ApiRequest, execute, fetch};
use crate::store::{Action, AuthorAction, Slice};

pub async fn fetch_authors(client: &Client) -> Result<Vec<Author>, ApiError> {
    perform(
        client,
        Slice::Author,
        "fetch authors",
        fetch(client.transport(), ApiRequest::to(Endpoint::Authors)),
        |authors: &Vec<Author>| Action::Author(AuthorAction::AuthorsLoaded(authors.clone())),
    )
    .await
}

pub async fn fetch_deleted_authors(client: &Client) -> Result<Vec<Author>, ApiError> {
    perform(
        client,
        Slice::Author,
        "fetch deleted authors",
        fetch(client.transport(), ApiRequest::to(Endpoint::DeletedAuthors)),
        |authors: &Vec<Author>| {
            Action::Author(AuthorAction::DeletedAuthorsLoaded(authors.clone()))
        },
    )
    .await
}

pub async fn fetch_author(client: &Client, id: AuthorId) -> Result<Author, ApiError> {
    perform(
        client,
        Slice::Author,
        "fetch author",
        fetch(client.transport(), ApiRequest::to(Endpoint::Author(id))),
        |author: &Author| Action::Author(AuthorAction::AuthorLoaded(author.clone())),
    )
    .await
}

pub async fn create_author(client: &Client, draft: AuthorDraft) -> Result<Author, ApiError> {
    perform(
        client,
        Slice::Author,
        "create author",
        async {
            require_text(&draft.name, "name")?;
            fetch(
                client.transport(),
                ApiRequest::to(Endpoint::CreateAuthor).json(&draft)?,
            )
            .await
        },
        |author: &Author| Action::Author(AuthorAction::AuthorCreated(author.clone())),
    )
    .await
}

pub async fn update_author(
    client: &Client,
    id: AuthorId,
    draft: AuthorDraft,
) -> Result<Author, ApiError> {
    perform(
        client,
        Slice::Author,
        "update author",
        async {
            require_text(&draft.name, "name")?;
            fetch(
                client.transport(),
                ApiRequest::to(Endpoint::UpdateAuthor(id)).json(&draft)?,
            )
            .await
        },
        |author: &Author| Action::Author(AuthorAction::AuthorUpdated(author.clone())),
    )
    .await
}

/// Soft delete; the author stays restorable.
pub async fn delete_author(client: &Client, id: AuthorId) -> Result<(), ApiError> {
    perform(
        client,
        Slice::Author,
        "delete author",
        execute(client.transport(), ApiRequest::to(Endpoint::DeleteAuthor(id))),
        |_| Action::Author(AuthorAction::AuthorDeleted(id)),
    )
    .await
}

pub async fn restore_author(client: &Client, id: AuthorId) -> Result<Author, ApiError> {
    perform(
        client,
        Slice::Author,
        "restore author",
        fetch(client.transport(), ApiRequest::to(Endpoint::RestoreAuthor(id))),
        |author: &Author| Action::Author(AuthorAction::AuthorRestored(author.clone())),
    )
    .await
}

pub async fn fetch_followed_authors(client: &Client) -> Result<Vec<Author>, ApiError> {
    perform(
        client,
        Slice::Author,
        "fetch followed authors",
        fetch(client.transport(), ApiRequest::to(Endpoint::FollowedAuthors)),
        |authors: &Vec<Author>| Action::Author(AuthorAction::FollowedLoaded(authors.clone())),
    )
    .await
}

pub async fn follow_author(client: &Client, id: AuthorId) -> Result<Author, ApiError> {
    perform(
        client,
        Slice::Author,
        "follow author",
        fetch(client.transport(), ApiRequest::to(Endpoint::FollowAuthor(id))),
        |author: &Author| Action::Author(AuthorAction::AuthorFollowed(author.clone())),
    )
    .await
}

pub async fn unfollow_author(client: &Client, id: AuthorId) -> Result<(), ApiError> {
    perform(
        client,
        Slice::Author,
        "unfollow author",
        execute(client.transport(), ApiRequest::to(Endpoint::UnfollowAuthor(id))),
        |_| Action::Author(AuthorAction::AuthorUnfollowed(id)),
    )
    .await
}
