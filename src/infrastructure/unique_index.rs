//! Unique value index shared by the in-memory repositories

use std::collections::HashMap;
use std::hash::Hash;

use crate::domain::validator::{FieldErrors, ValidationError};

/// Maps each unique field's values to the record that owns them.
///
/// Callers hold the index under the same lock as the records, so checking
/// for conflicts and inserting happen as one step.
#[derive(Debug)]
pub struct UniqueIndex<K> {
    fields: HashMap<&'static str, HashMap<String, K>>,
}

impl<K> Default for UniqueIndex<K> {
    fn default() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> UniqueIndex<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Owner of a value, if any
    pub fn lookup(&self, field: &str, value: &str) -> Option<K> {
        self.fields.get(field)?.get(value).copied()
    }

    /// Values already held by a record other than `owner`
    pub fn conflicts(&self, values: &[(&'static str, &str)], owner: &K) -> FieldErrors {
        let mut errors = FieldErrors::new();

        for (field, value) in values {
            if let Some(existing) = self.lookup(field, value) {
                if existing != *owner {
                    errors.add(*field, ValidationError::uniqueness_violation());
                }
            }
        }

        errors
    }

    pub fn insert(&mut self, values: &[(&'static str, &str)], owner: K) {
        for (field, value) in values {
            self.fields
                .entry(*field)
                .or_default()
                .insert((*value).to_string(), owner);
        }
    }

    /// Drop every value held by `owner`
    pub fn remove_owner(&mut self, owner: &K) {
        for values in self.fields.values_mut() {
            values.retain(|_, k| k != owner);
        }
    }
}
