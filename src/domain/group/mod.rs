//! Group domain module
//!
//! Named collections of users. A user's group is a loose label, so groups
//! carry no membership and no cascading relationship.

mod entity;
mod repository;
mod validation;

pub use entity::{Group, GroupId};
pub use repository::GroupRepository;
pub use validation::{
    DESCRIPTION, GROUP_NAME, MAX_DESCRIPTION_LENGTH, MAX_GROUP_NAME_BYTES, MIN_GROUP_NAME_BYTES,
    group_schema, validate_description, validate_group_name,
};
