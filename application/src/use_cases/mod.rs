//! Use cases
//!
//! Application-level operations that orchestrate queries and domain logic.

pub mod list_orbs;
pub mod validate_orb;
