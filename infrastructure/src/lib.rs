//! Infrastructure layer for the circleci orb client
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, configuration file loading and local
//! document access.

pub mod config;
pub mod document;
pub mod graphql;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, DEFAULT_ENDPOINT, FileApiConfig, FileConfig,
    FileHttpConfig, FileOutputConfig,
};
pub use document::loader::{DocumentError, LocalDocumentLoader};
pub use graphql::{client::GraphqlHttpTransport, protocol::GraphqlResponse};
