//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{AccountState, User, UserId};
use crate::domain::DomainError;

/// Repository trait for user storage.
///
/// Implementations enforce uniqueness of username, email and cellphone
/// atomically with the write, and report conflicts as
/// `DomainError::Validation` carrying a `UniquenessViolation` per field.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by their ID
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Get a user by their username
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Store a new user
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Replace an existing user
    async fn update(&self, user: &User) -> Result<User, DomainError>;

    /// Physically delete a user
    async fn delete(&self, id: &UserId) -> Result<bool, DomainError>;

    /// List users ordered by date joined, optionally filtered by state
    async fn list(&self, state: Option<AccountState>) -> Result<Vec<User>, DomainError>;

    /// Count users, optionally filtered by state
    async fn count(&self, state: Option<AccountState>) -> Result<usize, DomainError>;

    /// Record a successful login
    async fn record_login(&self, id: &UserId) -> Result<(), DomainError>;
}
