//! Validator library
//!
//! Stateless field rules shared by the user and group models: length bounds
//! measured in UTF-8 bytes or characters, the name/cellphone/password
//! patterns, and email well-formedness. Every rule is a pure function of its
//! input and is safe to call from any number of tasks at once.

mod error;
mod length;
mod message;
mod pattern;

use std::fmt::Debug;

pub use error::{FieldErrors, ValidationError, ValidationErrorKind};
pub use length::{Comparison, LengthBound, Measure};
pub use message::{EnglishMessages, MessageRenderer};
pub use pattern::{EmailValidator, PatternValidator};

/// A single field rule
pub trait Validator<T: ?Sized>: Send + Sync + Debug {
    /// Check a value, returning the failure if it is rejected
    fn check(&self, value: &T) -> Result<(), ValidationError>;
}
