use super::{Client, perform, require_text};
use crate::domain::{AuthorId, GenreId, Release, ReleaseDraft, ReleaseId, ReleaseType};
use crate::infra::endpoints::Endpoint;
use crate::infra::http::{ApiError, ApiRequest, execute, fetch};
use crate::store::{Action, ReleaseAction, Slice};

/// Optional catalog filters, sent as query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseFilter {
    pub genre_id: Option<GenreId>,
    pub release_type: Option<ReleaseType>,
    pub page: Option<u32>,
}

impl ReleaseFilter {
    fn apply(&self, mut request: ApiRequest) -> ApiRequest {
        if let Some(genre_id) = self.genre_id {
            request = request.query("genreId", genre_id);
        }
        if let Some(release_type) = self.release_type {
            request = request.query("type", release_type);
        }
        if let Some(page) = self.page {
            request = request.query("page", page);
        }
        request
    }
}

fn loaded(release: &Release) -> Action {
    Action::Release(ReleaseAction::ReleaseLoaded(release.clone()))
}

pub async fn fetch_releases(
    client: &Client,
    filter: &ReleaseFilter,
) -> Result<Vec<Release>, ApiError> {
    perform(
        client,
        Slice::Release,
        "fetch releases",
        fetch(
            client.transport(),
            filter.apply(ApiRequest::to(Endpoint::Releases)),
        ),
        |releases: &Vec<Release>| Action::Release(ReleaseAction::ReleasesLoaded(releases.clone())),
    )
    .await
}

pub async fn search_releases(client: &Client, text: &str) -> Result<Vec<Release>, ApiError> {
    perform(
        client,
        Slice::Release,
        "search releases",
        fetch(
            client.transport(),
            ApiRequest::to(Endpoint::SearchReleases).query("query", text.trim()),
        ),
        |releases: &Vec<Release>| {
            Action::Release(ReleaseAction::SearchResultsLoaded(releases.clone()))
        },
    )
    .await
}

pub async fn fetch_deleted_releases(client: &Client) -> Result<Vec<Release>, ApiError> {
    perform(
        client,
        Slice::Release,
        "fetch deleted releases",
        fetch(client.transport(), ApiRequest::to(Endpoint::DeletedReleases)),
        |releases: &Vec<Release>| {
            Action::Release(ReleaseAction::DeletedReleasesLoaded(releases.clone()))
        },
    )
    .await
}

pub async fn fetch_release(client: &Client, id: ReleaseId) -> Result<Release, ApiError> {
    perform(
        client,
        Slice::Release,
        "fetch release",
        fetch(client.transport(), ApiRequest::to(Endpoint::Release(id))),
        loaded,
    )
    .await
}

pub async fn fetch_author_releases(
    client: &Client,
    author_id: AuthorId,
) -> Result<Vec<Release>, ApiError> {
    perform(
        client,
        Slice::Release,
        "fetch author releases",
        fetch(
            client.transport(),
            ApiRequest::to(Endpoint::AuthorReleases(author_id)),
        ),
        |releases: &Vec<Release>| {
            Action::Release(ReleaseAction::AuthorReleasesLoaded {
                author_id,
                releases: releases.clone(),
            })
        },
    )
    .await
}

pub async fn create_release(client: &Client, draft: ReleaseDraft) -> Result<Release, ApiError> {
    perform(
        client,
        Slice::Release,
        "create release",
        async {
            require_text(&draft.title, "title")?;
            fetch(
                client.transport(),
                ApiRequest::to(Endpoint::CreateRelease).json(&draft)?,
            )
            .await
        },
        |release: &Release| Action::Release(ReleaseAction::ReleaseCreated(release.clone())),
    )
    .await
}

pub async fn update_release(
    client: &Client,
    id: ReleaseId,
    draft: ReleaseDraft,
) -> Result<Release, ApiError> {
    perform(
        client,
        Slice::Release,
        "update release",
        async {
            require_text(&draft.title, "title")?;
            fetch(
                client.transport(),
                ApiRequest::to(Endpoint::UpdateRelease(id)).json(&draft)?,
            )
            .await
        },
        |release: &Release| Action::Release(ReleaseAction::ReleaseUpdated(release.clone())),
    )
    .await
}

pub async fn delete_release(client: &Client, id: ReleaseId) -> Result<(), ApiError> {
    perform(
        client,
        Slice::Release,
        "delete release",
        execute(client.transport(), ApiRequest::to(Endpoint::DeleteRelease(id))),
        |_| Action::Release(ReleaseAction::ReleaseDeleted(id)),
    )
    .await
}

pub async fn restore_release(client: &Client, id: ReleaseId) -> Result<Release, ApiError> {
    perform(
        client,
        Slice::Release,
        "restore release",
        fetch(client.transport(), ApiRequest::to(Endpoint::RestoreRelease(id))),
        |release: &Release| Action::Release(ReleaseAction::ReleaseRestored(release.clone())),
    )
    .await
}

pub async fn fetch_favorites(client: &Client) -> Result<Vec<Release>, ApiError> {
    perform(
        client,
        Slice::Release,
        "fetch favorites",
        fetch(client.transport(), ApiRequest::to(Endpoint::Favorites)),
        |releases: &Vec<Release>| Action::Release(ReleaseAction::FavoritesLoaded(releases.clone())),
    )
    .await
}

pub async fn add_favorite(client: &Client, id: ReleaseId) -> Result<Release, ApiError> {
    perform(
        client,
        Slice::Release,
        "add favorite",
        fetch(client.transport(), ApiRequest::to(Endpoint::AddFavorite(id))),
        |release: &Release| Action::Release(ReleaseAction::FavoriteAdded(release.clone())),
    )
    .await
}

pub async fn remove_favorite(client: &Client, id: ReleaseId) -> Result<(), ApiError> {
    perform(
        client,
        Slice::Release,
        "remove favorite",
        execute(client.transport(), ApiRequest::to(Endpoint::RemoveFavorite(id))),
        |_| Action::Release(ReleaseAction::FavoriteRemoved(id)),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_only_sends_set_fields() {
        let filter = ReleaseFilter {
            release_type: Some(ReleaseType::Album),
            page: Some(2),
            ..Default::default()
        };
        let request = filter.apply(ApiRequest::to(Endpoint::Releases));
        assert_eq!(
            request.query,
            vec![
                ("type".to_string(), "ALBUM".to_string()),
                ("page".to_string(), "2".to_string())
            ]
        );
    }
}
