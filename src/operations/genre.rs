use super::{Client, perform, require_text};
use crate::domain::{Genre, GenreId};
use crate::infra::endpoints::Endpoint;
use crate::infra::http::{ApiError, ApiRequest, execute, fetch};
use crate::store::{Action, GenreAction, Slice};
use serde_json::json;

pub async fn fetch_genres(client: &Client) -> Result<Vec<Genre>, ApiError> {
    perform(
        client,
        Slice::Genre,
        "fetch genres",
        fetch(client.transport(), ApiRequest::to(Endpoint::Genres)),
        |genres: &Vec<Genre>| Action::Genre(GenreAction::GenresLoaded(genres.clone())),
    )
    .await
}

pub async fn create_genre(client: &Client, name: &str) -> Result<Genre, ApiError> {
    perform(
        client,
        Slice::Genre,
        "create genre",
        async {
            require_text(name, "name")?;
            let request = ApiRequest::to(Endpoint::CreateGenre).json(&json!({ "name": name.trim() }))?;
            fetch(client.transport(), request).await
        },
        |genre: &Genre| Action::Genre(GenreAction::GenreCreated(genre.clone())),
    )
    .await
}

pub async fn update_genre(client: &Client, id: GenreId, name: &str) -> Result<Genre, ApiError> {
    perform(
        client,
        Slice::Genre,
        "update genre",
        async {
            require_text(name, "name")?;
            let request =
                ApiRequest::to(Endpoint::UpdateGenre(id)).json(&json!({ "name": name.trim() }))?;
            fetch(client.transport(), request).await
        },
        |genre: &Genre| Action::Genre(GenreAction::GenreUpdated(genre.clone())),
    )
    .await
}

pub async fn delete_genre(client: &Client, id: GenreId) -> Result<(), ApiError> {
    perform(
        client,
        Slice::Genre,
        "delete genre",
        execute(client.transport(), ApiRequest::to(Endpoint::DeleteGenre(id))),
        |_| Action::Genre(GenreAction::GenreDeleted(id)),
    )
    .await
}
