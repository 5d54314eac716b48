//! GraphQL query definitions and the response mapper
//!
//! Each query is a zero-sized type implementing [`GraphqlQuery`]: it owns the
//! query text and names the typed structure its `data` tree decodes into.
//! [`decode`] is the only place an untyped payload becomes a typed value.

pub mod list_orbs;
pub mod validate_orb;

use crate::ports::query_transport::TransportError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

pub use list_orbs::{ListOrbsData, ListOrbsQuery};
pub use validate_orb::{ValidateOrbData, ValidateOrbQuery};

/// A named GraphQL operation with a typed response shape
pub trait GraphqlQuery {
    /// Operation name as declared in [`Self::DOCUMENT`]
    const OPERATION: &'static str;

    /// Full query text sent to the server
    const DOCUMENT: &'static str;

    /// Structure the response `data` tree decodes into
    type Data: DeserializeOwned;
}

/// Decode a response payload into the query's typed data.
///
/// Purely structural: field names and nesting must match the query text.
pub fn decode<Q: GraphqlQuery>(payload: serde_json::Value) -> Result<Q::Data, TransportError> {
    serde_json::from_value(payload).map_err(|e| TransportError::Decode {
        operation: Q::OPERATION.to_string(),
        message: e.to_string(),
    })
}

/// Treat an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}


#[cfg(test)]
mod tests {
    use super::*;

    struct Probe;

    #[derive(Debug, Deserialize)]
    struct ProbeData {
        #[allow(dead_code)]
        value: i64,
    }

    impl GraphqlQuery for Probe {
        const OPERATION: &'static str = "Probe";
        const DOCUMENT: &'static str = "query Probe { value }";
        type Data = ProbeData;
    }

    #[test]
    fn test_decode_mismatch_names_operation() {
        let err = decode::<Probe>(serde_json::json!({"other": 1})).unwrap_err();
        match err {
            TransportError::Decode { operation, .. } => assert_eq!(operation, "Probe"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_matching_payload() {
        assert!(decode::<Probe>(serde_json::json!({"value": 3})).is_ok());
    }
}
