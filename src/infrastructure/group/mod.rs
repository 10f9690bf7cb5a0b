//! Group infrastructure module

mod repository;
mod service;

pub use repository::InMemoryGroupRepository;
pub use service::{CreateGroupRequest, GroupService, UpdateGroupRequest};
