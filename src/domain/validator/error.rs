//! Validation error types

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::message::{EnglishMessages, MessageRenderer};

/// Classification of a single validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// Value is shorter than the configured minimum
    TooShort,
    /// Value is longer than the configured maximum
    TooLong,
    /// Value does not match the expected format (passwords)
    InvalidFormat,
    /// Value contains characters outside the allowed name alphabet
    InvalidCharacters,
    /// Value is not an 11-digit cellphone number starting with 1
    InvalidCellphone,
    /// Value is not a well-formed email address
    InvalidEmail,
    /// A required value was missing or blank
    Required,
    /// Value is already taken by another record
    UniquenessViolation,
}

impl ValidationErrorKind {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::TooShort => "too_short",
            Self::TooLong => "too_long",
            Self::InvalidFormat => "invalid_format",
            Self::InvalidCharacters => "invalid_characters",
            Self::InvalidCellphone => "invalid_cellphone",
            Self::InvalidEmail => "invalid_email",
            Self::Required => "required",
            Self::UniquenessViolation => "uniqueness_violation",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single validation failure.
///
/// Length failures carry the configured `limit` and the `actual` measured
/// value so a renderer can pick the right plural form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    actual: Option<usize>,
}

impl ValidationError {
    /// Create an error with no length payload
    pub fn new(kind: ValidationErrorKind) -> Self {
        Self {
            kind,
            limit: None,
            actual: None,
        }
    }

    pub fn too_short(limit: usize, actual: usize) -> Self {
        Self {
            kind: ValidationErrorKind::TooShort,
            limit: Some(limit),
            actual: Some(actual),
        }
    }

    pub fn too_long(limit: usize, actual: usize) -> Self {
        Self {
            kind: ValidationErrorKind::TooLong,
            limit: Some(limit),
            actual: Some(actual),
        }
    }

    pub fn required() -> Self {
        Self::new(ValidationErrorKind::Required)
    }

    pub fn uniqueness_violation() -> Self {
        Self::new(ValidationErrorKind::UniquenessViolation)
    }

    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn actual(&self) -> Option<usize> {
        self.actual
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&EnglishMessages.render(self))
    }
}

impl std::error::Error for ValidationError {}

/// Validation failures collected per field.
///
/// Every failing rule on every field is kept; nothing is dropped after the
/// first error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<ValidationError>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for a single failing field
    pub fn single(field: impl Into<String>, error: ValidationError) -> Self {
        let mut errors = Self::new();
        errors.add(field, error);
        errors
    }

    /// Record a failure for a field
    pub fn add(&mut self, field: impl Into<String>, error: ValidationError) {
        self.errors.entry(field.into()).or_default().push(error);
    }

    /// Merge another set of errors into this one
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, errors) in other.errors {
            self.errors.entry(field).or_default().extend(errors);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors recorded for one field
    pub fn get(&self, field: &str) -> &[ValidationError] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a field has a failure of the given kind
    pub fn has(&self, field: &str, kind: ValidationErrorKind) -> bool {
        self.get(field).iter().any(|e| e.kind() == kind)
    }

    /// Names of all failing fields, in sorted order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationError)> {
        self.errors
            .iter()
            .flat_map(|(field, errors)| errors.iter().map(move |e| (field.as_str(), e)))
    }

    /// `Ok(())` when empty, otherwise `Err(self)`
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Render every failure with the given renderer as `field: message` lines
    pub fn render(&self, renderer: &dyn MessageRenderer) -> Vec<String> {
        self.iter()
            .map(|(field, error)| format!("{}: {}", field, renderer.render(error)))
            .collect()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&EnglishMessages).join("; "))
    }
}

impl std::error::Error for FieldErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_error_payload() {
        let error = ValidationError::too_short(4, 2);
        assert_eq!(error.kind(), ValidationErrorKind::TooShort);
        assert_eq!(error.limit(), Some(4));
        assert_eq!(error.actual(), Some(2));
    }

    #[test]
    fn test_field_errors_collects_multiple() {
        let mut errors = FieldErrors::new();
        errors.add("username", ValidationError::too_short(4, 1));
        errors.add(
            "username",
            ValidationError::new(ValidationErrorKind::InvalidCharacters),
        );
        errors.add("cellphone", ValidationError::new(ValidationErrorKind::InvalidCellphone));

        assert_eq!(errors.get("username").len(), 2);
        assert!(errors.has("username", ValidationErrorKind::InvalidCharacters));
        assert!(errors.has("cellphone", ValidationErrorKind::InvalidCellphone));
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["cellphone", "username"]);
        assert_eq!(errors.iter().count(), 3);
    }

    #[test]
    fn test_field_errors_merge_and_result() {
        let mut errors = FieldErrors::new();
        assert!(errors.clone().into_result().is_ok());

        errors.merge(FieldErrors::single("email", ValidationError::required()));
        errors.merge(FieldErrors::single("email", ValidationError::uniqueness_violation()));

        assert_eq!(errors.get("email").len(), 2);
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_serialization() {
        let errors = FieldErrors::single("username", ValidationError::too_short(4, 3));
        let json = serde_json::to_value(&errors).unwrap();

        assert_eq!(json["username"][0]["kind"], "too_short");
        assert_eq!(json["username"][0]["limit"], 4);
        assert_eq!(json["username"][0]["actual"], 3);
    }

    #[test]
    fn test_serialization_omits_missing_payload() {
        let json = serde_json::to_string(&ValidationError::required()).unwrap();
        assert_eq!(json, r#"{"kind":"required"}"#);
    }
}
