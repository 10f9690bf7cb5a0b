//! User field table

use once_cell::sync::Lazy;

use crate::domain::schema::{FieldSpec, Schema};
use crate::domain::validator::{
    EmailValidator, FieldErrors, LengthBound, PatternValidator, ValidationError, Validator,
};

pub const USERNAME: &str = "username";
pub const EMAIL: &str = "email";
pub const CELLPHONE: &str = "cellphone";
pub const GROUP: &str = "group";
pub const PASSWORD: &str = "password";

pub const MIN_USERNAME_BYTES: usize = 4;
pub const MAX_USERNAME_LENGTH: usize = 30;
pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MAX_CELLPHONE_LENGTH: usize = 30;
pub const MAX_GROUP_LENGTH: usize = 254;

static USER_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field(
            FieldSpec::new(USERNAME)
                .rule(PatternValidator::name())
                .rule(LengthBound::min_bytes(MIN_USERNAME_BYTES))
                .rule(LengthBound::max_chars(MAX_USERNAME_LENGTH))
                .unique(),
        )
        .field(
            FieldSpec::new(EMAIL)
                .rule(EmailValidator)
                .rule(LengthBound::max_chars(MAX_EMAIL_LENGTH))
                .unique()
                .nullable(),
        )
        .field(
            FieldSpec::new(CELLPHONE)
                .rule(PatternValidator::cellphone())
                .rule(LengthBound::max_chars(MAX_CELLPHONE_LENGTH))
                .unique()
                .nullable()
                .blank(),
        )
        .field(
            FieldSpec::new(GROUP)
                .rule(LengthBound::max_chars(MAX_GROUP_LENGTH))
                .nullable()
                .blank(),
        )
        .field(FieldSpec::new(PASSWORD).rule(PatternValidator::password()))
});

/// The user field table
pub fn user_schema() -> &'static Schema {
    &USER_SCHEMA
}

/// Validate a plaintext password before it is hashed
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    PatternValidator::password().check(password)
}

/// Validate a username against the pattern and width rules
pub fn validate_username(username: &str) -> Result<(), FieldErrors> {
    user_schema().validate([(USERNAME, Some(username))]).into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validator::ValidationErrorKind;

    #[test]
    fn test_valid_usernames() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("user_name").is_ok());
        assert!(validate_username("john.doe@corp").is_ok());
        assert!(validate_username("张三").is_ok());
        assert!(validate_username("abcd").is_ok());
    }

    #[test]
    fn test_username_too_short() {
        let errors = validate_username("abc").unwrap_err();
        assert!(errors.has(USERNAME, ValidationErrorKind::TooShort));

        // One CJK character is three bytes
        let errors = validate_username("张").unwrap_err();
        assert!(errors.has(USERNAME, ValidationErrorKind::TooShort));
    }

    #[test]
    fn test_username_too_long() {
        let errors = validate_username(&"a".repeat(31)).unwrap_err();
        assert!(errors.has(USERNAME, ValidationErrorKind::TooLong));
        assert!(validate_username(&"a".repeat(30)).is_ok());
    }

    #[test]
    fn test_username_invalid_and_short() {
        let errors = validate_username("a-b").unwrap_err();

        assert!(errors.has(USERNAME, ValidationErrorKind::InvalidCharacters));
        assert!(errors.has(USERNAME, ValidationErrorKind::TooShort));
    }

    #[test]
    fn test_empty_username_required() {
        let errors = validate_username("").unwrap_err();
        assert!(errors.has(USERNAME, ValidationErrorKind::Required));
    }

    #[test]
    fn test_passwords() {
        assert!(validate_password("abc123").is_ok());
        assert!(validate_password("pw123456").is_ok());
        assert_eq!(
            validate_password("ab1!").unwrap_err().kind(),
            ValidationErrorKind::InvalidFormat
        );
        assert!(validate_password("пароль1").is_err());
    }

    #[test]
    fn test_unique_fields() {
        let unique: Vec<_> = user_schema().unique_fields().collect();
        assert_eq!(unique, vec![USERNAME, EMAIL, CELLPHONE]);
    }

    #[test]
    fn test_optional_fields() {
        let errors = user_schema().validate([
            (CELLPHONE, None),
            (CELLPHONE, Some("")),
            (GROUP, None),
            (EMAIL, None),
        ]);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_invalid_contact_fields() {
        let errors = user_schema().validate([
            (EMAIL, Some("not-an-email")),
            (CELLPHONE, Some("23800138000")),
        ]);

        assert!(errors.has(EMAIL, ValidationErrorKind::InvalidEmail));
        assert!(errors.has(CELLPHONE, ValidationErrorKind::InvalidCellphone));
    }
}
