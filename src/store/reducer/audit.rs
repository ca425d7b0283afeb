use super::super::action::AuditAction;
use super::super::collections::{merge_key, replace_all};
use super::super::state::AuditState;
use super::{begin, fail, settle};

pub fn reduce(state: &mut AuditState, action: AuditAction) {
    match action {
        AuditAction::StartLoading => begin(&mut state.loading, &mut state.error),
        AuditAction::AuditLoaded(entries) => {
            replace_all(&mut state.entries, entries);
            settle(&mut state.loading, &mut state.error);
        }
        AuditAction::ModeratorAuditLoaded {
            moderator_id,
            entries,
        } => {
            merge_key(&mut state.by_moderator, moderator_id, entries);
            settle(&mut state.loading, &mut state.error);
        }
        AuditAction::RequestFailure(message) => {
            fail(&mut state.loading, &mut state.error, message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AuditEntry, ModerationAction};
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    fn entry(id: i64, moderator_id: i64) -> AuditEntry {
        AuditEntry {
            id,
            moderator_id,
            target_id: 3,
            action: ModerationAction::DeleteReview,
            details: None,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn moderator_logs_merge_per_key() {
        let mut state = AuditState::default();
        reduce(
            &mut state,
            AuditAction::ModeratorAuditLoaded {
                moderator_id: 1,
                entries: vec![entry(1, 1)],
            },
        );
        let first = Arc::clone(&state.by_moderator[&1]);
        reduce(
            &mut state,
            AuditAction::ModeratorAuditLoaded {
                moderator_id: 2,
                entries: vec![entry(2, 2)],
            },
        );

        assert!(Arc::ptr_eq(&first, &state.by_moderator[&1]));
        assert_eq!(state.by_moderator[&2].len(), 1);
    }
}
