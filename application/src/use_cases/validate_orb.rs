//! Validate Orb use case
//!
//! Submits an orb document to the server for validation. `validate` and
//! `expand` share the same round-trip and differ only in what they do with
//! a valid result.

use crate::ports::query_transport::{QueryTransport, TransportError};
use crate::queries::{ValidateOrbQuery, decode};
use circleci_domain::{ValidationFailure, ValidationResult};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during validation or expansion
#[derive(Error, Debug)]
pub enum ValidateOrbError {
    /// The request itself could not be completed
    #[error("Unable to validate orb: {0}")]
    Request(#[from] TransportError),

    /// The server judged the document invalid
    #[error(transparent)]
    Invalid(#[from] ValidationFailure),
}

impl ValidateOrbError {
    /// True when the document was rejected, as opposed to the request failing.
    pub fn is_validation_failure(&self) -> bool {
        matches!(self, ValidateOrbError::Invalid(_))
    }
}

/// Use case for validating and expanding orb documents
pub struct ValidateOrbUseCase<T: QueryTransport + ?Sized + 'static> {
    transport: Arc<T>,
    endpoint: String,
}

impl<T: QueryTransport + ?Sized + 'static> ValidateOrbUseCase<T> {
    pub fn new(transport: Arc<T>, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    /// Validate a document, returning the server's result when it is valid.
    pub async fn validate(&self, document: &str) -> Result<ValidationResult, ValidateOrbError> {
        let result = self.submit(document).await?;
        result.check()?;
        Ok(result)
    }

    /// Validate a document and return its expanded form.
    pub async fn expand(&self, document: &str) -> Result<String, ValidateOrbError> {
        let result = self.submit(document).await?;
        Ok(result.into_expanded()?)
    }

    async fn submit(&self, document: &str) -> Result<ValidationResult, ValidateOrbError> {
        debug!("Submitting orb document ({} bytes)", document.len());

        let request = ValidateOrbQuery::request(document);
        let payload = self.transport.execute(&request, &self.endpoint).await?;
        let result: ValidationResult = decode::<ValidateOrbQuery>(payload)?.into();

        if result.is_inconsistent() {
            warn!("Server reported the orb as invalid without any error messages");
        }
        debug!(
            "Validation result: valid={}, {} error(s)",
            result.valid,
            result.errors.len()
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::query_transport::QueryRequest;
    use async_trait::async_trait;
    use std::sync::Mutex;

    // -- Mock QueryTransport ---------------------------------------------------

    struct MockTransport {
        response: Mutex<Option<Result<serde_json::Value, TransportError>>>,
        request: Mutex<Option<QueryRequest>>,
    }

    impl MockTransport {
        fn responding(response: Result<serde_json::Value, TransportError>) -> Arc<Self> {
            Arc::new(Self {
                response: Mutex::new(Some(response)),
                request: Mutex::new(None),
            })
        }

        fn sent_document(&self) -> Option<String> {
            self.request
                .lock()
                .unwrap()
                .as_ref()
                .and_then(|r| r.variable("orb").map(String::from))
        }
    }

    #[async_trait]
    impl QueryTransport for MockTransport {
        async fn execute(
            &self,
            request: &QueryRequest,
            _endpoint: &str,
        ) -> Result<serde_json::Value, TransportError> {
            *self.request.lock().unwrap() = Some(request.clone());
            self.response
                .lock()
                .unwrap()
                .take()
                .expect("only one round-trip expected")
        }
    }

    // -- Helpers ---------------------------------------------------------------

    fn valid_response(output: &str) -> Result<serde_json::Value, TransportError> {
        Ok(serde_json::json!({
            "orbConfig": {
                "valid": true,
                "errors": [],
                "sourceYaml": "source",
                "outputYaml": output
            }
        }))
    }

    fn invalid_response(messages: &[&str]) -> Result<serde_json::Value, TransportError> {
        let errors: Vec<_> = messages
            .iter()
            .map(|m| serde_json::json!({"message": m}))
            .collect();
        Ok(serde_json::json!({
            "orbConfig": {
                "valid": false,
                "errors": errors,
                "sourceYaml": "source",
                "outputYaml": null
            }
        }))
    }

    fn use_case(transport: &Arc<MockTransport>) -> ValidateOrbUseCase<MockTransport> {
        ValidateOrbUseCase::new(Arc::clone(transport), "https://example.test/graphql")
    }

    // -- validate --------------------------------------------------------------

    #[tokio::test]
    async fn validate_succeeds_on_valid_response() {
        let transport = MockTransport::responding(valid_response("x: 1"));

        let result = use_case(&transport).validate("orb: yaml").await.unwrap();

        assert!(result.valid);
        assert_eq!(transport.sent_document().as_deref(), Some("orb: yaml"));
    }

    #[tokio::test]
    async fn validate_fails_with_aggregated_errors() {
        let transport = MockTransport::responding(invalid_response(&["bad field"]));

        let err = use_case(&transport).validate("orb").await.unwrap_err();

        assert!(err.is_validation_failure());
        assert!(err.to_string().contains("bad field"));
        assert_eq!(err.to_string(), "\n-- bad field,\n");
    }

    #[tokio::test]
    async fn validate_with_no_errors_listed_still_fails() {
        let transport = MockTransport::responding(invalid_response(&[]));

        let err = use_case(&transport).validate("orb").await.unwrap_err();

        match err {
            ValidateOrbError::Invalid(failure) => assert_eq!(failure.message(), "\n"),
            other => panic!("unexpected error: {other}"),
        }
    }

    // -- expand ----------------------------------------------------------------

    #[tokio::test]
    async fn expand_returns_output_document() {
        let transport = MockTransport::responding(valid_response("x: 1"));

        let expanded = use_case(&transport).expand("orb").await.unwrap();

        assert_eq!(expanded, "x: 1");
    }

    #[tokio::test]
    async fn expand_fails_like_validate() {
        let transport = MockTransport::responding(invalid_response(&["bad field", "other"]));

        let err = use_case(&transport).expand("orb").await.unwrap_err();

        assert!(err.is_validation_failure());
        assert_eq!(err.to_string(), "\n-- bad field,\n-- other,\n");
    }

    // -- request failures ------------------------------------------------------

    #[tokio::test]
    async fn transport_error_is_not_a_validation_failure() {
        let transport = MockTransport::responding(Err(TransportError::Timeout));

        let err = use_case(&transport).validate("orb").await.unwrap_err();

        assert!(!err.is_validation_failure());
        assert_eq!(err.to_string(), "Unable to validate orb: Request timeout");
    }

    #[tokio::test]
    async fn protocol_error_is_wrapped_for_expand() {
        let transport =
            MockTransport::responding(Err(TransportError::Protocol(vec!["no such field".into()])));

        let err = use_case(&transport).expand("orb").await.unwrap_err();

        assert!(matches!(
            err,
            ValidateOrbError::Request(TransportError::Protocol(_))
        ));
    }

    #[tokio::test]
    async fn malformed_response_is_request_error() {
        let transport = MockTransport::responding(Ok(serde_json::json!({"orbConfig": "nope"})));

        let err = use_case(&transport).validate("orb").await.unwrap_err();

        assert!(matches!(
            err,
            ValidateOrbError::Request(TransportError::Decode { .. })
        ));
    }
}
