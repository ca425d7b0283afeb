//! Reqwest-backed transport.

use super::{ApiError, ApiRequest, Transport};
use crate::infra::app_config::AppConfig;
use crate::infra::endpoints::Method;
use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

pub struct HttpTransport {
    client: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        let transport = Self::new(
            &config.api_base_url,
            Duration::from_secs(config.timeout_secs),
            &config.user_agent,
        )?;
        transport.set_token(config.session_token.clone());
        Ok(transport)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let url = self.url(&request.path);
        log::debug!("{} {}", request.method, url);

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if let Some(token) = self.token.read().as_deref() {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;

        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16(), &body));
        }
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn set_token(&self, token: Option<String>) {
        *self.token.write() = token;
    }
}

fn map_transport_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Transport(format!("request timed out: {error}"))
    } else {
        ApiError::Transport(error.to_string())
    }
}
