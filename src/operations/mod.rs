//! Async operations: one server call each, reported through the store.
//!
//! Every operation dispatches its slice's `StartLoading`, performs a single
//! request, then dispatches either the matching success action or
//! `RequestFailure`. The result (or error) is also returned so a caller can
//! react locally, e.g. with an inline form error.
//!
//! There is no retry, timeout or request fencing here. Two calls in flight
//! race and whichever settles last wins.

pub mod audit;
pub mod auth;
pub mod author;
pub mod genre;
pub mod like;
pub mod release;
pub mod report;
pub mod review;
pub mod user;

use crate::infra::http::{ApiError, Transport};
use crate::store::{Action, Slice, Store};
use std::future::Future;
use std::sync::Arc;

/// Store plus transport; everything an operation needs.
#[derive(Clone)]
pub struct Client {
    store: Store,
    transport: Arc<dyn Transport>,
}

impl Client {
    pub fn new(store: Store, transport: Arc<dyn Transport>) -> Self {
        Self { store, transport }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}

/// Drives `slice` through loading, then success or failure.
pub(crate) async fn perform<T, Fut, F>(
    client: &Client,
    slice: Slice,
    label: &str,
    request: Fut,
    on_success: F,
) -> Result<T, ApiError>
where
    Fut: Future<Output = Result<T, ApiError>>,
    F: FnOnce(&T) -> Action,
{
    client.store.dispatch(Action::start_loading(slice));
    log::debug!("{label}: started");

    match request.await {
        Ok(value) => {
            client.store.dispatch(on_success(&value));
            log::debug!("{label}: done");
            Ok(value)
        }
        Err(err) => {
            log::warn!("{label} failed: {err}");
            client.store.dispatch(Action::failure(slice, err.message()));
            Err(err)
        }
    }
}

pub(crate) fn require_text(value: &str, field: &'static str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        Err(crate::domain::DomainError::EmptyField(field).into())
    } else {
        Ok(())
    }
}
