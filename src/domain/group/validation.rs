//! Group validation

use once_cell::sync::Lazy;

use crate::domain::schema::{FieldSpec, Schema};
use crate::domain::validator::{FieldErrors, LengthBound, PatternValidator};

pub const GROUP_NAME: &str = "group_name";
pub const DESCRIPTION: &str = "description";

pub const MIN_GROUP_NAME_BYTES: usize = 4;
pub const MAX_GROUP_NAME_BYTES: usize = 60;
pub const MAX_DESCRIPTION_LENGTH: usize = 200;

static GROUP_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field(
            FieldSpec::new(GROUP_NAME)
                .rule(PatternValidator::name())
                .rule(LengthBound::min_bytes(MIN_GROUP_NAME_BYTES))
                .rule(LengthBound::max_bytes(MAX_GROUP_NAME_BYTES))
                .unique()
                .blank(),
        )
        .field(
            FieldSpec::new(DESCRIPTION)
                .rule(LengthBound::max_chars(MAX_DESCRIPTION_LENGTH))
                .blank(),
        )
});

/// The group field table
pub fn group_schema() -> &'static Schema {
    &GROUP_SCHEMA
}

/// Validate a group name; blank names are accepted
pub fn validate_group_name(name: &str) -> Result<(), FieldErrors> {
    group_schema().validate([(GROUP_NAME, Some(name))]).into_result()
}

/// Validate a group description
pub fn validate_description(description: &str) -> Result<(), FieldErrors> {
    group_schema()
        .validate([(DESCRIPTION, Some(description))])
        .into_result()
}
