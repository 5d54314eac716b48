//! Orb listing concepts.
//!
//! - [`entities::Orb`]: a named remote configuration package
//! - [`value_objects::Cursor`]: opaque pagination token
//! - [`value_objects::Page`]: one round-trip of `(Cursor, Orb)` entries

pub mod entities;
pub mod value_objects;
