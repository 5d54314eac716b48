//! Orb entity

/// A named remote configuration package (Entity)
///
/// Identity is the name; the listing query does not select anything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Orb {
    name: String,
}

impl Orb {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Orb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
