//! Pagination value objects: [`Cursor`] and [`Page`]

use super::entities::Orb;

/// Opaque position within an ordered remote collection (Value Object)
///
/// The empty cursor means "start of collection". Cursors are only ever
/// forwarded verbatim to the query that produced them, so there is no
/// ordering or comparison beyond equality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor(String);

impl Cursor {
    /// The cursor for the first page.
    pub fn start() -> Self {
        Self(String::new())
    }

    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_start(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_start() {
            write!(f, "<start>")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// One round-trip's worth of orbs
///
/// Entries are kept in server order. A page is consumed once: its orbs are
/// yielded and its last cursor is carried into the next request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub entries: Vec<(Cursor, Orb)>,
    pub has_next_page: bool,
    /// Size of the whole collection as reported by the server (informational)
    pub total_count: i64,
}

impl Page {
    pub fn new(entries: Vec<(Cursor, Orb)>, has_next_page: bool) -> Self {
        Self {
            entries,
            has_next_page,
            total_count: 0,
        }
    }

    pub fn with_total_count(mut self, total_count: i64) -> Self {
        self.total_count = total_count;
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
