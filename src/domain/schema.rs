//! Field schema tables
//!
//! Each entity describes its fields as a table of rules, uniqueness and
//! nullability. Entities and services consult the table instead of carrying
//! constraints as scattered checks.

use super::validator::{FieldErrors, ValidationError, Validator};

/// Constraints attached to one field
#[derive(Debug)]
pub struct FieldSpec {
    name: &'static str,
    validators: Vec<Box<dyn Validator<str>>>,
    unique: bool,
    nullable: bool,
    blank: bool,
}

impl FieldSpec {
    /// A required, non-unique field with no rules
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            validators: Vec::new(),
            unique: false,
            nullable: false,
            blank: false,
        }
    }

    /// Add a rule; every rule runs, failures are not short-circuited
    pub fn rule(mut self, validator: impl Validator<str> + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Values must be unique across records when present
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// The field may be absent
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// The field may be an empty string, which skips its rules
    pub fn blank(mut self) -> Self {
        self.blank = true;
        self
    }

    /// Check a value against this field, returning every failure
    pub fn check(&self, value: Option<&str>) -> Vec<ValidationError> {
        match value {
            None if self.nullable => Vec::new(),
            None => vec![ValidationError::required()],
            Some("") if self.blank => Vec::new(),
            Some("") => vec![ValidationError::required()],
            Some(value) => self
                .validators
                .iter()
                .filter_map(|v| v.check(value).err())
                .collect(),
        }
    }
}

/// The field table of one entity
#[derive(Debug, Default)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Look up a field by name
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of the fields that must be unique
    pub fn unique_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.unique).map(|f| f.name)
    }

    /// Validate the given field values, collecting every failure.
    ///
    /// Only the listed fields are checked. Names missing from the table are
    /// ignored.
    pub fn validate<'a>(
        &self,
        values: impl IntoIterator<Item = (&'a str, Option<&'a str>)>,
    ) -> FieldErrors {
        let mut errors = FieldErrors::new();

        for (name, value) in values {
            let Some(spec) = self.get(name) else {
                continue;
            };

            for error in spec.check(value) {
                errors.add(name, error);
            }
        }

        errors
    }

    /// Present values of the unique fields, as reported by `value_of`.
    ///
    /// An empty string is a value like any other; only absent fields are
    /// exempt from uniqueness.
    pub fn unique_values<'a>(
        &self,
        value_of: impl Fn(&str) -> Option<&'a str>,
    ) -> Vec<(&'static str, &'a str)> {
        self.unique_fields()
            .filter_map(|name| value_of(name).map(|value| (name, value)))
            .collect()
    }
}
