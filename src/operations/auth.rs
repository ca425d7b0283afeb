use super::{Client, perform, require_text};
use crate::domain::{AuthResponse, LoginRequest, PasswordReset, RegisterRequest, User};
use crate::infra::endpoints::Endpoint;
use crate::infra::http::{ApiError, ApiRequest, execute, fetch};
use crate::store::{Action, SessionAction, Slice};
use serde_json::json;

/// Signs in and installs the returned token on the transport.
pub async fn login(client: &Client, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let body = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    perform(
        client,
        Slice::Session,
        "login",
        async {
            require_text(&body.email, "email")?;
            require_text(&body.password, "password")?;
            let response: AuthResponse =
                fetch(client.transport(), ApiRequest::to(Endpoint::Login).json(&body)?).await?;
            client.transport().set_token(Some(response.token.clone()));
            Ok::<_, ApiError>(response)
        },
        |response| {
            Action::Session(SessionAction::LoggedIn {
                user: response.user.clone(),
                token: response.token.clone(),
            })
        },
    )
    .await
}

pub async fn register(client: &Client, request: RegisterRequest) -> Result<AuthResponse, ApiError> {
    perform(
        client,
        Slice::Session,
        "register",
        async {
            require_text(&request.username, "username")?;
            require_text(&request.email, "email")?;
            require_text(&request.password, "password")?;
            let response: AuthResponse = fetch(
                client.transport(),
                ApiRequest::to(Endpoint::Register).json(&request)?,
            )
            .await?;
            client.transport().set_token(Some(response.token.clone()));
            Ok::<_, ApiError>(response)
        },
        |response| {
            Action::Session(SessionAction::Registered {
                user: response.user.clone(),
                token: response.token.clone(),
            })
        },
    )
    .await
}

/// Ends the session. An already-expired token counts as logged out.
pub async fn logout(client: &Client) -> Result<(), ApiError> {
    perform(
        client,
        Slice::Session,
        "logout",
        async {
            match execute(client.transport(), ApiRequest::to(Endpoint::Logout)).await {
                Ok(()) | Err(ApiError::Unauthorized { .. }) => {}
                Err(err) => return Err(err),
            }
            client.transport().set_token(None);
            Ok::<_, ApiError>(())
        },
        |_| Action::Session(SessionAction::LoggedOut),
    )
    .await
}

pub async fn load_current_user(client: &Client) -> Result<User, ApiError> {
    perform(
        client,
        Slice::Session,
        "load current user",
        fetch(client.transport(), ApiRequest::to(Endpoint::CurrentUser)),
        |user: &User| Action::Session(SessionAction::CurrentUserLoaded(user.clone())),
    )
    .await
}

pub async fn request_password_reset(client: &Client, email: &str) -> Result<(), ApiError> {
    perform(
        client,
        Slice::Session,
        "request password reset",
        async {
            require_text(email, "email")?;
            let request = ApiRequest::to(Endpoint::ForgotPassword).json(&json!({ "email": email }))?;
            execute(client.transport(), request).await
        },
        |_| Action::Session(SessionAction::PasswordResetRequested),
    )
    .await
}

pub async fn reset_password(client: &Client, reset: PasswordReset) -> Result<(), ApiError> {
    perform(
        client,
        Slice::Session,
        "reset password",
        async {
            require_text(&reset.password, "password")?;
            execute(
                client.transport(),
                ApiRequest::to(Endpoint::ResetPassword).json(&reset)?,
            )
            .await
        },
        |_| Action::Session(SessionAction::PasswordResetCompleted),
    )
    .await
}
