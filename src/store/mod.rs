//! Reducer-style client state.
//!
//! Each domain has a state slice, an action enum and a pure reducer. [`Store`]
//! is the shared handle: dispatches run the reducer under a write lock and
//! publish a new revision so readers know to re-select.

mod action;
pub mod collections;
mod reducer;
mod state;

pub use action::{
    Action, AuditAction, AuthorAction, GenreAction, LikeAction, ReleaseAction, ReportAction,
    ReviewAction, SessionAction, Slice, UserAction,
};
pub use reducer::reduce;
pub use state::{
    AppState, AuditState, AuthorState, GenreState, LikeState, ReleaseState, ReportState,
    ReviewState, SessionState, UserState,
};

use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Clone)]
pub struct Store {
    state: Arc<RwLock<AppState>>,
    revision: Arc<watch::Sender<u64>>,
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(state: AppState) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            state: Arc::new(RwLock::new(state)),
            revision: Arc::new(revision),
        }
    }

    /// Applies one action. The lock is never held across an await point, so
    /// dispatches from concurrent operations are applied one at a time in
    /// whatever order they arrive.
    pub fn dispatch(&self, action: Action) {
        log::trace!("dispatch {:?}", action);
        {
            let mut state = self.state.write();
            reducer::reduce(&mut state, action);
        }
        self.revision.send_modify(|rev| *rev += 1);
    }

    pub fn select<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.state.read())
    }

    /// A copy of the whole tree. Lists are shared `Arc`s, so this is cheap.
    pub fn snapshot(&self) -> AppState {
        self.state.read().clone()
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Receiver that changes after every dispatch.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("revision", &self.revision())
            .finish_non_exhaustive()
    }
}
