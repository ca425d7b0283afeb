use super::{Client, perform};
use crate::domain::{AuditEntry, UserId};
use crate::infra::endpoints::Endpoint;
use crate::infra::http::{ApiError, ApiRequest, fetch};
use crate::store::{Action, AuditAction, Slice};

pub async fn fetch_audit(client: &Client) -> Result<Vec<AuditEntry>, ApiError> {
    perform(
        client,
        Slice::Audit,
        "fetch audit log",
        fetch(client.transport(), ApiRequest::to(Endpoint::Audit)),
        |entries: &Vec<AuditEntry>| Action::Audit(AuditAction::AuditLoaded(entries.clone())),
    )
    .await
}

pub async fn fetch_moderator_audit(
    client: &Client,
    moderator_id: UserId,
) -> Result<Vec<AuditEntry>, ApiError> {
    perform(
        client,
        Slice::Audit,
        "fetch moderator audit log",
        fetch(
            client.transport(),
            ApiRequest::to(Endpoint::ModeratorAudit(moderator_id)),
        ),
        |entries: &Vec<AuditEntry>| {
            Action::Audit(AuditAction::ModeratorAuditLoaded {
                moderator_id,
                entries: entries.clone(),
            })
        },
    )
    .await
}
