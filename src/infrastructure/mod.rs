//! Infrastructure layer - stores, hashing, services and logging

pub mod group;
pub mod logging;
pub mod unique_index;
pub mod user;
