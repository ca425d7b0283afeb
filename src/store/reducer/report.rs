use super::super::action::ReportAction;
use super::super::collections::{append, replace, replace_all};
use super::super::state::ReportState;
use super::{begin, fail, settle};

pub fn reduce(state: &mut ReportState, action: ReportAction) {
    match action {
        ReportAction::StartLoading => begin(&mut state.loading, &mut state.error),
        ReportAction::ReportsLoaded(reports) => {
            replace_all(&mut state.reports, reports);
            settle(&mut state.loading, &mut state.error);
        }
        ReportAction::ReportCreated(report) => {
            append(&mut state.reports, report);
            settle(&mut state.loading, &mut state.error);
        }
        ReportAction::ReportProcessed(report) => {
            replace(&mut state.reports, &report);
            settle(&mut state.loading, &mut state.error);
        }
        ReportAction::RequestFailure(message) => {
            fail(&mut state.loading, &mut state.error, message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::report;
    use super::*;
    use crate::domain::ReportStatus;

    #[test]
    fn processing_moves_report_out_of_pending() {
        let mut state = ReportState::default();
        reduce(
            &mut state,
            ReportAction::ReportsLoaded(vec![
                report(1, ReportStatus::Pending),
                report(2, ReportStatus::Pending),
            ]),
        );
        reduce(
            &mut state,
            ReportAction::ReportProcessed(report(1, ReportStatus::Resolved)),
        );

        let pending: Vec<_> = state.pending().map(|r| r.id).collect();
        assert_eq!(pending, vec![2]);
        assert_eq!(
            state.find(1).map(|r| r.status),
            Some(ReportStatus::Resolved)
        );
    }

    #[test]
    fn failure_keeps_reports() {
        let mut state = ReportState::default();
        reduce(
            &mut state,
            ReportAction::ReportCreated(report(3, ReportStatus::Pending)),
        );
        let before = state.reports.clone();
        reduce(&mut state, ReportAction::RequestFailure("nope".into()));
        assert_eq!(state.reports, before);
        assert_eq!(state.error.as_deref(), Some("nope"));
    }
}
