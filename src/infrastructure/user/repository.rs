//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::DomainError;
use crate::domain::user::{AccountState, USERNAME, User, UserId, UserRepository, user_schema};
use crate::infrastructure::unique_index::UniqueIndex;

#[derive(Debug, Default)]
struct UserStore {
    users: HashMap<UserId, User>,
    /// Unique field values -> owning user
    index: UniqueIndex<UserId>,
}

/// In-memory implementation of UserRepository
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<UserStore>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

fn unique_values(user: &User) -> Vec<(&'static str, &str)> {
    user_schema().unique_values(|field| user.field_value(field))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let store = self.store.read().await;
        Ok(store.users.get(id).cloned())
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let store = self.store.read().await;

        Ok(store
            .index
            .lookup(USERNAME, username)
            .and_then(|id| store.users.get(&id).cloned()))
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut store = self.store.write().await;
        let id = *user.id();

        if store.users.contains_key(&id) {
            return Err(DomainError::uniqueness("id"));
        }

        let values = unique_values(&user);
        let conflicts = store.index.conflicts(&values, &id);

        if !conflicts.is_empty() {
            return Err(DomainError::Validation(conflicts));
        }

        store.index.insert(&values, id);
        store.users.insert(id, user.clone());

        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let mut store = self.store.write().await;
        let id = *user.id();

        if !store.users.contains_key(&id) {
            return Err(DomainError::not_found(format!(
                "User '{}' not found",
                user.username()
            )));
        }

        let values = unique_values(user);
        let conflicts = store.index.conflicts(&values, &id);

        if !conflicts.is_empty() {
            return Err(DomainError::Validation(conflicts));
        }

        store.index.remove_owner(&id);
        store.index.insert(&values, id);
        store.users.insert(id, user.clone());

        Ok(user.clone())
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        let mut store = self.store.write().await;

        if store.users.remove(id).is_some() {
            store.index.remove_owner(id);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn list(&self, state: Option<AccountState>) -> Result<Vec<User>, DomainError> {
        let store = self.store.read().await;

        let mut result: Vec<User> = store
            .users
            .values()
            .filter(|u| state.is_none_or(|s| u.state() == s))
            .cloned()
            .collect();
        result.sort_by_key(|u| u.date_joined());

        Ok(result)
    }

    async fn count(&self, state: Option<AccountState>) -> Result<usize, DomainError> {
        let store = self.store.read().await;

        Ok(store
            .users
            .values()
            .filter(|u| state.is_none_or(|s| u.state() == s))
            .count())
    }

    async fn record_login(&self, id: &UserId) -> Result<(), DomainError> {
        let mut store = self.store.write().await;

        match store.users.get_mut(id) {
            Some(user) => {
                user.record_login();
                Ok(())
            }
            None => Err(DomainError::not_found(format!("User '{}' not found", id))),
        }
    }
}
