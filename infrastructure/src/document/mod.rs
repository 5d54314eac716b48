//! Local orb document access

pub mod loader;
