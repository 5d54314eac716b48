//! Query transport port
//!
//! Defines the interface for sending a GraphQL query to the CircleCI API.

use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that can occur while executing a query
///
/// These cover everything between "request built" and "typed data decoded":
/// the connection, the HTTP exchange, GraphQL-level errors and shape
/// mismatches. None of them mean the submitted document was judged invalid.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("GraphQL errors: {}", .0.join("; "))]
    Protocol(Vec<String>),

    #[error("Response contained no data")]
    MissingData,

    #[error("Failed to decode {operation} response: {message}")]
    Decode { operation: String, message: String },

    #[error("Request timeout")]
    Timeout,
}

/// A single query round-trip: document text plus string variables
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryRequest {
    pub query: String,
    pub variables: BTreeMap<String, String>,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: BTreeMap::new(),
        }
    }

    /// Set a variable, replacing any previous value.
    pub fn var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }
}

/// Transport for GraphQL queries
///
/// Implementations return the untyped `data` tree of the response; turning
/// it into typed results is the job of [`crate::queries::decode`].
#[async_trait]
pub trait QueryTransport: Send + Sync {
    async fn execute(
        &self,
        request: &QueryRequest,
        endpoint: &str,
    ) -> Result<serde_json::Value, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_replaces_previous_value() {
        let request = QueryRequest::new("query").var("after", "").var("after", "c1");
        assert_eq!(request.variable("after"), Some("c1"));
        assert_eq!(request.variables.len(), 1);
    }

    #[test]
    fn test_protocol_error_joins_messages() {
        let error = TransportError::Protocol(vec!["first".into(), "second".into()]);
        assert_eq!(error.to_string(), "GraphQL errors: first; second");
    }
}
