//! Rendering validation failures as text
//!
//! Renderers are passed explicitly to whoever formats errors; there is no
//! process-wide locale.

use super::{ValidationError, ValidationErrorKind};

/// Turns a validation failure into user-facing text
pub trait MessageRenderer: Send + Sync {
    fn render(&self, error: &ValidationError) -> String;
}

/// Plain English messages
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishMessages;

impl EnglishMessages {
    fn unit(count: usize) -> &'static str {
        if count == 1 { "character" } else { "characters" }
    }
}

impl MessageRenderer for EnglishMessages {
    fn render(&self, error: &ValidationError) -> String {
        match (error.kind(), error.limit(), error.actual()) {
            (ValidationErrorKind::TooShort, Some(limit), Some(actual)) => format!(
                "Ensure this value has at least {} {} (it has {}).",
                limit,
                Self::unit(limit),
                actual
            ),
            (ValidationErrorKind::TooLong, Some(limit), Some(actual)) => format!(
                "Ensure this value has at most {} {} (it has {}).",
                limit,
                Self::unit(limit),
                actual
            ),
            (ValidationErrorKind::TooShort, _, _) => "Ensure this value is longer.".to_string(),
            (ValidationErrorKind::TooLong, _, _) => "Ensure this value is shorter.".to_string(),
            (ValidationErrorKind::InvalidFormat, _, _) => "Enter a valid password.".to_string(),
            (ValidationErrorKind::InvalidCharacters, _, _) => {
                "Only letters, digits, spaces, '_', '@', '.' and CJK characters are allowed."
                    .to_string()
            }
            (ValidationErrorKind::InvalidCellphone, _, _) => {
                "Invalid cellphone number format.".to_string()
            }
            (ValidationErrorKind::InvalidEmail, _, _) => "Enter a valid email address.".to_string(),
            (ValidationErrorKind::Required, _, _) => "This field is required.".to_string(),
            (ValidationErrorKind::UniquenessViolation, _, _) => {
                "This value is already taken.".to_string()
            }
        }
    }
}
