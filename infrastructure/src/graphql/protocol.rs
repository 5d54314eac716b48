//! GraphQL-over-HTTP response envelope.
//!
//! Requests are sent as the serialized [`QueryRequest`](circleci_application::QueryRequest)
//! (`{"query": ..., "variables": {...}}`). Responses arrive wrapped in a
//! `{"data": ..., "errors": [...]}` envelope, which this module unwraps.

use circleci_application::TransportError;
use serde::Deserialize;

/// A GraphQL error object; only the message is surfaced
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

/// GraphQL response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlError>>,
}

impl GraphqlResponse {
    /// Parse a raw response body.
    pub fn parse(body: &str) -> Result<Self, TransportError> {
        serde_json::from_str(body).map_err(|e| TransportError::Decode {
            operation: "GraphQL envelope".to_string(),
            message: format!("{e}; body: {}", truncate(body, 200)),
        })
    }

    /// Unwrap the `data` tree. Any reported error wins over partial data.
    pub fn into_data(self) -> Result<serde_json::Value, TransportError> {
        if let Some(errors) = self.errors.filter(|errors| !errors.is_empty()) {
            return Err(TransportError::Protocol(
                errors.into_iter().map(|e| e.message).collect(),
            ));
        }

        match self.data {
            Some(data) if !data.is_null() => Ok(data),
            _ => Err(TransportError::MissingData),
        }
    }
}

/// Cut `text` to at most `max` bytes on a char boundary.
pub(crate) fn truncate(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
