//! Group repository trait

use async_trait::async_trait;

use super::entity::{Group, GroupId};
use crate::domain::DomainError;

/// Repository for groups.
///
/// Groups are created, read and updated; there is no delete. Group names
/// are unique, the blank name included.
#[async_trait]
pub trait GroupRepository: Send + Sync + std::fmt::Debug {
    /// Get a group by ID
    async fn get(&self, id: &GroupId) -> Result<Option<Group>, DomainError>;

    /// Get a group by its name
    async fn get_by_name(&self, name: &str) -> Result<Option<Group>, DomainError>;

    /// Create a new group
    async fn create(&self, group: Group) -> Result<Group, DomainError>;

    /// Update an existing group, including renames
    async fn update(&self, group: Group) -> Result<Group, DomainError>;

    /// List groups ordered by creation time
    async fn list(&self) -> Result<Vec<Group>, DomainError>;

    async fn count(&self) -> Result<usize, DomainError>;
}
