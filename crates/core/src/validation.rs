//! Field validation
//!
//! Collects every problem with an input before any mutation happens, so
//! callers can report them all at once.

use smallvec::SmallVec;
use thiserror::Error;

/// A single problem with a named input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Field name as it appears in the request.
    pub field: &'static str,

    /// Human readable message.
    pub message: &'static str,
}

/// All problems found with an input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} invalid field(s)", .0.len())]
pub struct Violations(SmallVec<[FieldViolation; 4]>);

impl Violations {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a problem with a field.
    pub fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.push(FieldViolation { field, message });
    }

    /// Whether no problems were recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Recorded problems, in the order they were found.
    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.0.iter()
    }

    /// Whether a problem was recorded for `field`.
    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|violation| violation.field == field)
    }

    /// Require a non-blank text value, returning it trimmed.
    pub fn required_text(
        &mut self,
        field: &'static str,
        value: Option<String>,
        message: &'static str,
    ) -> Option<String> {
        let value = value
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        if value.is_none() {
            self.push(field, message);
        }

        value
    }

    /// Require a well-formed email address, returning it trimmed.
    pub fn required_email(
        &mut self,
        field: &'static str,
        value: Option<String>,
        message: &'static str,
    ) -> Option<String> {
        let value = value
            .map(|value| value.trim().to_string())
            .filter(|value| is_valid_email(value));

        if value.is_none() {
            self.push(field, message);
        }

        value
    }

    /// Turn the collection into a result, yielding `value` when empty.
    ///
    /// # Errors
    ///
    /// Returns `self` when any problem was recorded.
    pub fn into_result<T>(self, value: impl FnOnce() -> Option<T>) -> Result<T, Self> {
        if !self.is_empty() {
            return Err(self);
        }

        value().ok_or(self)
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a FieldViolation;
    type IntoIter = std::slice::Iter<'a, FieldViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Loose structural email check: one `@`, a non-empty local part and a
/// dotted domain without whitespace.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let Some((name, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    !name.is_empty() && !tld.is_empty()
}
