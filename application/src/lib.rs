//! Application layer for the circleci orb client
//!
//! This crate contains use cases, query definitions and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod queries;
pub mod use_cases;

// Re-export commonly used types
pub use ports::query_transport::{QueryRequest, QueryTransport, TransportError};
pub use queries::{GraphqlQuery, ListOrbsQuery, ValidateOrbQuery, decode};
pub use use_cases::list_orbs::{ListOrbsError, ListOrbsUseCase};
pub use use_cases::validate_orb::{ValidateOrbError, ValidateOrbUseCase};
