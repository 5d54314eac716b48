//! Orb validation concepts.
//!
//! - [`result::ValidationResult`]: what the server said about a document
//! - [`result::ErrorMessage`]: one reported problem
//! - [`failure::ValidationFailure`]: the aggregated, user-facing failure

pub mod failure;
pub mod result;
