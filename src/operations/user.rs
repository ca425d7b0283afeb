use super::{Client, perform};
use crate::domain::{User, UserId, UserRole, UserUpdate};
use crate::infra::endpoints::Endpoint;
use crate::infra::http::{ApiError, ApiRequest, fetch};
use crate::store::{Action, Slice, UserAction};
use serde_json::json;

fn updated(user: &User) -> Action {
    Action::User(UserAction::UserUpdated(user.clone()))
}

pub async fn fetch_users(client: &Client) -> Result<Vec<User>, ApiError> {
    perform(
        client,
        Slice::User,
        "fetch users",
        fetch(client.transport(), ApiRequest::to(Endpoint::Users)),
        |users: &Vec<User>| Action::User(UserAction::UsersLoaded(users.clone())),
    )
    .await
}

pub async fn fetch_user(client: &Client, id: UserId) -> Result<User, ApiError> {
    perform(
        client,
        Slice::User,
        "fetch user",
        fetch(client.transport(), ApiRequest::to(Endpoint::User(id))),
        |user: &User| Action::User(UserAction::ProfileLoaded(user.clone())),
    )
    .await
}

pub async fn update_user(client: &Client, id: UserId, update: UserUpdate) -> Result<User, ApiError> {
    perform(
        client,
        Slice::User,
        "update user",
        async {
            fetch(
                client.transport(),
                ApiRequest::to(Endpoint::UpdateUser(id)).json(&update)?,
            )
            .await
        },
        updated,
    )
    .await
}

pub async fn block_user(client: &Client, id: UserId) -> Result<User, ApiError> {
    perform(
        client,
        Slice::User,
        "block user",
        fetch(client.transport(), ApiRequest::to(Endpoint::BlockUser(id))),
        updated,
    )
    .await
}

pub async fn unblock_user(client: &Client, id: UserId) -> Result<User, ApiError> {
    perform(
        client,
        Slice::User,
        "unblock user",
        fetch(client.transport(), ApiRequest::to(Endpoint::UnblockUser(id))),
        updated,
    )
    .await
}

pub async fn change_role(client: &Client, id: UserId, role: UserRole) -> Result<User, ApiError> {
    perform(
        client,
        Slice::User,
        "change role",
        async {
            fetch(
                client.transport(),
                ApiRequest::to(Endpoint::ChangeRole(id)).json(&json!({ "role": role }))?,
            )
            .await
        },
        updated,
    )
    .await
}
