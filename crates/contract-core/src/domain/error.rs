//! Error Types
//!
//! Three classes: transport failures, server-reported failures (with an
//! optional `detail` body) and client-side validation that blocks a submit
//! before any request is made.

use thiserror::Error;

/// Result type for REST calls
pub type ClientResult<T> = Result<T, ClientError>;

/// Failure of a call to the REST API
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Request never completed (DNS, CORS, connection refused...)
    #[error("Network error: {0}")]
    Network(String),

    /// HTTP 401: missing, expired or rejected token
    #[error("Unauthorized: {}", .0.as_deref().unwrap_or("not authenticated"))]
    Unauthorized(Option<String>),

    /// Any other non-success status
    #[error("API returned {}: {}", .status, .detail.as_deref().unwrap_or("no detail"))]
    Api { status: u16, detail: Option<String> },

    /// Response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Persistent token storage unavailable
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ClientError {
    /// Build from a non-success status and its raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = parse_detail(body);
        if status == 401 {
            ClientError::Unauthorized(detail)
        } else {
            ClientError::Api { status, detail }
        }
    }

    /// Server-provided detail text, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Unauthorized(detail) | ClientError::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Detail text when the server sent one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized(_))
    }
}

/// Extract `detail` from a FastAPI-style error body.
///
/// `detail` is either a string or a list of `{loc, msg, type}` objects.
pub fn parse_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

/// Pre-submission form validation failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Contract name is required.")]
    EmptyName,

    #[error("Please add at least one task.")]
    NoTasks,

    #[error("Task name cannot be empty.")]
    EmptyTaskName { index: usize },

    #[error("Task amount must be greater than zero.")]
    NonPositiveAmount { index: usize },
}

/// Why a form submission did not go through
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Request(#[from] ClientError),
}
