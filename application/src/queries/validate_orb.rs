//! `ValidateOrb` query

use super::{GraphqlQuery, null_as_default};
use crate::ports::query_transport::QueryRequest;
use circleci_domain::{ErrorMessage, ValidationResult};
use serde::{Deserialize, Serialize};

/// Submit an orb document for validation and expansion
pub struct ValidateOrbQuery;

impl ValidateOrbQuery {
    /// Variable carrying the document text
    pub const ORB: &'static str = "orb";

    pub fn request(document: &str) -> QueryRequest {
        QueryRequest::new(Self::DOCUMENT).var(Self::ORB, document)
    }
}

impl GraphqlQuery for ValidateOrbQuery {
    const OPERATION: &'static str = "ValidateOrb";
    const DOCUMENT: &'static str = r#"
query ValidateOrb ($orb: String!) {
  orbConfig(orbYaml: $orb) {
    valid,
    errors { message },
    sourceYaml,
    outputYaml
  }
}"#;
    type Data = ValidateOrbData;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateOrbData {
    pub orb_config: OrbConfig,
}

// The server leaves `outputYaml` and `errors` null depending on validity,
// so every field but `valid` tolerates null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbConfig {
    pub valid: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<OrbConfigError>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source_yaml: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub output_yaml: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrbConfigError {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

impl From<ValidateOrbData> for ValidationResult {
    fn from(data: ValidateOrbData) -> Self {
        let config = data.orb_config;
        ValidationResult {
            valid: config.valid,
            source_document: config.source_yaml,
            expanded_document: config.output_yaml,
            errors: config
                .errors
                .into_iter()
                .map(|e| ErrorMessage::new(e.message))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::decode;
    use crate::queries::shape::{json_keys, selected_fields};

    #[test]
    fn test_query_selection_matches_decode_target() {
        let sample = ValidateOrbData {
            orb_config: OrbConfig {
                errors: vec![OrbConfigError::default()],
                ..Default::default()
            },
        };
        let sample = serde_json::to_value(sample).unwrap();
        assert_eq!(selected_fields(ValidateOrbQuery::DOCUMENT), json_keys(&sample));
    }

    #[test]
    fn test_request_carries_document() {
        let request = ValidateOrbQuery::request("version: 2.1\n");
        assert_eq!(request.variable("orb"), Some("version: 2.1\n"));
        assert_eq!(request.query, ValidateOrbQuery::DOCUMENT);
    }

    #[test]
    fn test_decode_valid_response() {
        let payload = serde_json::json!({
            "orbConfig": {
                "valid": true,
                "errors": [],
                "sourceYaml": "src",
                "outputYaml": "x: 1"
            }
        });

        let result: ValidationResult = decode::<ValidateOrbQuery>(payload).unwrap().into();
        assert!(result.valid);
        assert_eq!(result.source_document, "src");
        assert_eq!(result.expanded_document, "x: 1");
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_decode_invalid_response_with_nulls() {
        let payload = serde_json::json!({
            "orbConfig": {
                "valid": false,
                "errors": [{"message": "bad field"}, {"message": "worse field"}],
                "sourceYaml": null,
                "outputYaml": null
            }
        });

        let result: ValidationResult = decode::<ValidateOrbQuery>(payload).unwrap().into();
        assert!(!result.valid);
        assert_eq!(result.expanded_document, "");
        assert_eq!(
            result.errors,
            vec![ErrorMessage::new("bad field"), ErrorMessage::new("worse field")]
        );
    }

    #[test]
    fn test_missing_valid_flag_is_decode_error() {
        let payload = serde_json::json!({"orbConfig": {"errors": []}});
        assert!(decode::<ValidateOrbQuery>(payload).is_err());
    }
}
