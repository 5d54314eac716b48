//! Domain layer for the circleci orb client
//!
//! This crate contains the entities and value objects shared by every other
//! layer. It has no dependencies on transport, configuration or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! - **Orb**: a named remote configuration package
//! - **Cursor / Page**: server-driven pagination over the orb collection
//! - **ValidationResult**: the server's verdict on a submitted `orb.yml`
//! - **ValidationFailure**: the aggregated list of reported problems

pub mod orb;
pub mod validation;

// Re-export commonly used types
pub use orb::{
    entities::Orb,
    value_objects::{Cursor, Page},
};
pub use validation::{
    failure::ValidationFailure,
    result::{ErrorMessage, ValidationResult},
};
