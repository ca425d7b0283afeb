//! HTTP client boundary.
//!
//! Operations talk to the server only through [`Transport`]; the reqwest
//! adapter lives in [`transport`]. Header and token handling belong to the
//! transport, not to the callers.

mod error;
pub mod transport;

pub use error::ApiError;
pub use transport::HttpTransport;

use super::endpoints::{Endpoint, Method};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// One request against the API, relative to the transport's base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn to(endpoint: Endpoint) -> Self {
        Self {
            method: endpoint.method(),
            path: endpoint.path(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::validation(format!("Failed to encode request: {e}")))?;
        self.body = Some(value);
        Ok(self)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs the request and returns the parsed body (`Null` when empty).
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError>;

    /// Sets or clears the bearer token attached to later requests.
    fn set_token(&self, token: Option<String>);
}

/// Sends the request and decodes the body into `T`.
pub async fn fetch<T: DeserializeOwned>(
    transport: &dyn Transport,
    request: ApiRequest,
) -> Result<T, ApiError> {
    let value = transport.send(request).await?;
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Sends the request and discards whatever body comes back.
pub async fn execute(transport: &dyn Transport, request: ApiRequest) -> Result<(), ApiError> {
    transport.send(request).await.map(|_| ())
}
