//! HTTP adapter for the [`QueryTransport`] port.

use super::protocol::{GraphqlResponse, truncate};
use crate::config::FileConfig;
use async_trait::async_trait;
use circleci_application::{QueryRequest, QueryTransport, TransportError};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use std::time::Duration;
use tracing::{debug, trace};

/// User agent sent with every request
const USER_AGENT: &str = concat!("circleci-cli/", env!("CARGO_PKG_VERSION"));

/// Longest HTTP error body kept in a [`TransportError::Http`]
const MAX_ERROR_BODY: usize = 500;

/// Sends GraphQL queries as JSON POST requests.
///
/// One request per [`QueryTransport::execute`] call; no retries.
pub struct GraphqlHttpTransport {
    client: reqwest::Client,
    token: Option<String>,
}

impl GraphqlHttpTransport {
    pub fn new(token: Option<String>, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::Connection(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            token: token.filter(|t| !t.is_empty()),
        })
    }

    pub fn from_config(config: &FileConfig) -> Result<Self, TransportError> {
        Self::new(config.api.token.clone(), config.http.timeout())
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

#[async_trait]
impl QueryTransport for GraphqlHttpTransport {
    async fn execute(
        &self,
        request: &QueryRequest,
        endpoint: &str,
    ) -> Result<serde_json::Value, TransportError> {
        debug!("POST {} ({} variable(s))", endpoint, request.variables.len());

        let mut http_request = self
            .client
            .post(endpoint)
            .header(ACCEPT, "application/json")
            .json(request);
        if let Some(token) = &self.token {
            http_request = http_request.header(AUTHORIZATION, token.as_str());
        }

        let response = http_request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let body = response.text().await.map_err(map_reqwest_error)?;
        trace!("Response {}: {}", status, truncate(&body, MAX_ERROR_BODY));

        if !status.is_success() {
            return Err(TransportError::Http {
                status: status.as_u16(),
                body: truncate(body.trim(), MAX_ERROR_BODY).to_string(),
            });
        }

        GraphqlResponse::parse(&body)?.into_data()
    }
}

fn map_reqwest_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Connection(error.to_string())
    }
}
