//! Group entity

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{GROUP_NAME, validate_description, validate_group_name};
use crate::domain::validator::FieldErrors;

/// Group identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(Uuid);

impl GroupId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named collection of users.
///
/// Users refer to groups by a free-text label only, so nothing here tracks
/// membership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    id: GroupId,
    group_name: String,
    date_joined: DateTime<Utc>,
    description: String,
}

impl Group {
    /// Create a new group
    pub fn new(
        group_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, FieldErrors> {
        let group_name = group_name.into();
        let description = description.into();

        let mut errors = FieldErrors::new();
        if let Err(e) = validate_group_name(&group_name) {
            errors.merge(e);
        }
        if let Err(e) = validate_description(&description) {
            errors.merge(e);
        }
        errors.into_result()?;

        Ok(Self {
            id: GroupId::generate(),
            group_name,
            date_joined: Utc::now(),
            description,
        })
    }

    pub fn id(&self) -> &GroupId {
        &self.id
    }

    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    pub fn date_joined(&self) -> DateTime<Utc> {
        self.date_joined
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// String value of a schema field, used for uniqueness checks
    pub fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            GROUP_NAME => Some(self.group_name.as_str()),
            _ => None,
        }
    }

    /// Rename the group
    pub fn set_group_name(&mut self, group_name: impl Into<String>) -> Result<(), FieldErrors> {
        let group_name = group_name.into();
        validate_group_name(&group_name)?;
        self.group_name = group_name;
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), FieldErrors> {
        let description = description.into();
        validate_description(&description)?;
        self.description = description;
        Ok(())
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.group_name)
    }
}
