use crate::domain::DomainError;
use thiserror::Error;

/// Failure of a single API call.
///
/// Operations store [`ApiError::message`] in the slice's `error` field and
/// hand the error itself back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Transport(String),

    /// The request was rejected as invalid, by the server (4xx) or locally.
    #[error("{message}")]
    Validation {
        status: Option<u16>,
        message: String,
    },

    /// 401 or 403.
    #[error("{message}")]
    Unauthorized { status: u16, message: String },

    #[error("{message}")]
    Unexpected {
        status: Option<u16>,
        message: String,
    },

    /// The body did not match the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            status: None,
            message: message.into(),
        }
    }

    /// Human-readable text for banners and logs.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Validation { status, .. } | Self::Unexpected { status, .. } => *status,
            Self::Unauthorized { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Classifies a non-success response, preferring the server's own message.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let message = server_message(body).unwrap_or_else(|| {
            let preview = body_preview(body);
            if preview.is_empty() {
                format!("Request failed with status {status}")
            } else {
                format!("Request failed with status {status}: {preview}")
            }
        });

        match status {
            401 | 403 => Self::Unauthorized { status, message },
            400..=499 => Self::Validation {
                status: Some(status),
                message,
            },
            _ => Self::Unexpected {
                status: Some(status),
                message,
            },
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<crate::domain::ScoreError> for ApiError {
    fn from(err: crate::domain::ScoreError) -> Self {
        DomainError::from(err).into()
    }
}

fn server_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    ["message", "error", "detail"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(str::to_string)
        .filter(|m| !m.trim().is_empty())
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview: String = compact.chars().take(PREVIEW_CHAR_LIMIT).collect();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
