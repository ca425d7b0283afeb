//! Scripted transport shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{Value, json};
use soundscore::infra::endpoints::Method;
use soundscore::infra::http::{ApiError, ApiRequest, Transport};
use soundscore::{Client, Store};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::oneshot;

struct Scripted {
    result: Result<Value, ApiError>,
    gate: Option<oneshot::Receiver<()>>,
}

/// Answers requests from per-route queues, in the order they were scripted.
#[derive(Default)]
pub struct FakeTransport {
    routes: Mutex<HashMap<(Method, String), VecDeque<Scripted>>>,
    sent: Mutex<Vec<ApiRequest>>,
    token: Mutex<Option<String>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, method: Method, path: &str, body: Value) {
        self.push(method, path, Ok(body), None);
    }

    pub fn fail(&self, method: Method, path: &str, error: ApiError) {
        self.push(method, path, Err(error), None);
    }

    /// Like [`respond`](Self::respond), but the response is held back until
    /// the returned sender fires.
    pub fn respond_later(&self, method: Method, path: &str, body: Value) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.push(method, path, Ok(body), Some(rx));
        tx
    }

    fn push(
        &self,
        method: Method,
        path: &str,
        result: Result<Value, ApiError>,
        gate: Option<oneshot::Receiver<()>>,
    ) {
        self.routes
            .lock()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(Scripted { result, gate });
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.lock().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.token.lock().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        self.sent.lock().push(request.clone());
        let scripted = {
            let mut routes = self.routes.lock();
            routes
                .get_mut(&(request.method, request.path.clone()))
                .and_then(|queue| queue.pop_front())
        };
        let Some(scripted) = scripted else {
            return Err(ApiError::Unexpected {
                status: Some(404),
                message: format!("no scripted response for {} {}", request.method, request.path),
            });
        };
        if let Some(gate) = scripted.gate {
            let _ = gate.await;
        }
        scripted.result
    }

    fn set_token(&self, token: Option<String>) {
        *self.token.lock() = token;
    }
}

pub fn client_with(transport: &Arc<FakeTransport>) -> Client {
    Client::new(Store::new(), transport.clone())
}

pub fn user_json(id: i64, username: &str) -> Value {
    json!({ "id": id, "username": username, "role": "USER" })
}

pub fn moderator_json(id: i64) -> Value {
    json!({ "id": id, "username": "mod", "role": "MODERATOR" })
}

pub fn release_json(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "type": "ALBUM",
        "releaseDate": "2024-03-01",
        "authors": [{ "id": 1, "name": "Artist" }],
        "genres": [{ "id": 1, "name": "Rock" }]
    })
}

pub fn review_json(id: i64, release_id: i64, user_id: i64) -> Value {
    json!({
        "id": id,
        "userId": user_id,
        "releaseId": release_id,
        "title": "Solid",
        "scores": {
            "lyrics": 8,
            "structure": 7,
            "production": 9,
            "individuality": 6,
            "atmosphere": 10
        }
    })
}

pub fn report_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "reporterId": 7,
        "targetType": "REVIEW",
        "targetId": 3,
        "reason": "spam",
        "status": status
    })
}
