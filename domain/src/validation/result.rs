//! Outcome of a remote orb validation

use super::failure::ValidationFailure;

/// A single server-reported validation problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage(String);

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ErrorMessage {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ErrorMessage {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Result of submitting an orb document for validation (Value Object)
///
/// `errors` is expected to be empty whenever `valid` is true. The server
/// enforces that; this type does not, and [`ValidationResult::into_expanded`]
/// only looks at `valid`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub source_document: String,
    pub expanded_document: String,
    pub errors: Vec<ErrorMessage>,
}

impl ValidationResult {
    pub fn valid(source_document: impl Into<String>, expanded_document: impl Into<String>) -> Self {
        Self {
            valid: true,
            source_document: source_document.into(),
            expanded_document: expanded_document.into(),
            errors: Vec::new(),
        }
    }

    pub fn invalid(errors: Vec<ErrorMessage>) -> Self {
        Self {
            valid: false,
            errors,
            ..Default::default()
        }
    }

    /// True when the server said the document is invalid but gave no reason.
    pub fn is_inconsistent(&self) -> bool {
        !self.valid && self.errors.is_empty()
    }

    /// Check validity without consuming the result.
    pub fn check(&self) -> Result<(), ValidationFailure> {
        if self.valid {
            Ok(())
        } else {
            Err(ValidationFailure::from_errors(&self.errors))
        }
    }

    /// Consume the result, returning the expanded document when valid.
    pub fn into_expanded(self) -> Result<String, ValidationFailure> {
        self.check()?;
        Ok(self.expanded_document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_result_expands() {
        let result = ValidationResult::valid("orb: src", "x: 1");
        assert!(result.check().is_ok());
        assert_eq!(result.into_expanded().unwrap(), "x: 1");
    }

    #[test]
    fn test_invalid_result_fails_with_messages() {
        let result = ValidationResult::invalid(vec!["bad field".into()]);
        let failure = result.into_expanded().unwrap_err();
        assert!(failure.message().contains("bad field"));
    }

    #[test]
    fn test_invalid_without_errors_is_inconsistent_but_still_fails() {
        let result = ValidationResult::invalid(vec![]);
        assert!(result.is_inconsistent());
        let failure = result.check().unwrap_err();
        assert_eq!(failure.message(), "\n");
    }

    #[test]
    fn test_valid_result_ignores_stray_errors() {
        let mut result = ValidationResult::valid("", "out");
        result.errors.push("ignored".into());
        assert_eq!(result.into_expanded().unwrap(), "out");
    }
}
