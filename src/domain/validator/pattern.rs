//! Pattern validators

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidateEmail;

use super::{ValidationError, ValidationErrorKind, Validator};

/// Letters, digits, underscore, space, `@`, `.` and CJK unified ideographs
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_ @.\x{4e00}-\x{9fa5}]+$").unwrap());

/// Eleven digits with a leading 1
static CELLPHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^1[0-9]{10}$").unwrap());

/// 6 to 16 characters from the password alphabet, anchored at both ends
static PASSWORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9@#$%^&*]{6,16}$").unwrap());

/// Rejects values that do not match a regular expression
#[derive(Debug, Clone, Copy)]
pub struct PatternValidator {
    pattern: &'static Lazy<Regex>,
    kind: ValidationErrorKind,
}

impl PatternValidator {
    pub fn new(pattern: &'static Lazy<Regex>, kind: ValidationErrorKind) -> Self {
        Self { pattern, kind }
    }

    /// Alphabet shared by usernames and group names
    pub fn name() -> Self {
        Self::new(&NAME_PATTERN, ValidationErrorKind::InvalidCharacters)
    }

    pub fn cellphone() -> Self {
        Self::new(&CELLPHONE_PATTERN, ValidationErrorKind::InvalidCellphone)
    }

    pub fn password() -> Self {
        Self::new(&PASSWORD_PATTERN, ValidationErrorKind::InvalidFormat)
    }
}

impl Validator<str> for PatternValidator {
    fn check(&self, value: &str) -> Result<(), ValidationError> {
        if self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(ValidationError::new(self.kind))
        }
    }
}

/// Rejects malformed email addresses
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl Validator<str> for EmailValidator {
    fn check(&self, value: &str) -> Result<(), ValidationError> {
        if value.validate_email() {
            Ok(())
        } else {
            Err(ValidationError::new(ValidationErrorKind::InvalidEmail))
        }
    }
}
