use super::{Client, perform, require_text};
use crate::domain::{DomainError, Report, ReportDraft, ReportId, ReportStatus};
use crate::infra::endpoints::Endpoint;
use crate::infra::http::{ApiError, ApiRequest, fetch};
use crate::store::{Action, ReportAction, Slice};
use serde_json::json;

pub async fn fetch_reports(
    client: &Client,
    status: Option<ReportStatus>,
) -> Result<Vec<Report>, ApiError> {
    let mut request = ApiRequest::to(Endpoint::Reports);
    if let Some(status) = status {
        request = request.query("status", status);
    }
    perform(
        client,
        Slice::Report,
        "fetch reports",
        fetch(client.transport(), request),
        |reports: &Vec<Report>| Action::Report(ReportAction::ReportsLoaded(reports.clone())),
    )
    .await
}

pub async fn create_report(client: &Client, draft: ReportDraft) -> Result<Report, ApiError> {
    perform(
        client,
        Slice::Report,
        "create report",
        async {
            require_text(&draft.reason, "reason")?;
            fetch(
                client.transport(),
                ApiRequest::to(Endpoint::CreateReport).json(&draft)?,
            )
            .await
        },
        |report: &Report| Action::Report(ReportAction::ReportCreated(report.clone())),
    )
    .await
}

/// Settles a report. A report already known to be settled is refused
/// before any request goes out.
pub async fn process_report(
    client: &Client,
    id: ReportId,
    status: ReportStatus,
) -> Result<Report, ApiError> {
    let current = client
        .store()
        .select(|s| s.report.find(id).map(|r| r.status));
    perform(
        client,
        Slice::Report,
        "process report",
        async {
            let from = current.unwrap_or_default();
            if !from.can_transition_to(status) {
                return Err(ApiError::from(DomainError::InvalidReportTransition {
                    current: from,
                    next: status,
                }));
            }
            let request =
                ApiRequest::to(Endpoint::ProcessReport(id)).json(&json!({ "status": status }))?;
            fetch(client.transport(), request).await
        },
        |report: &Report| Action::Report(ReportAction::ReportProcessed(report.clone())),
    )
    .await
}
