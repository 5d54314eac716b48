//! GraphQL adapter
//!
//! Implements QueryTransport over HTTP for the CircleCI GraphQL API.

pub mod client;
pub mod protocol;
