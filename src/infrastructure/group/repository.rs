//! In-memory group repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::DomainError;
use crate::domain::group::{GROUP_NAME, Group, GroupId, GroupRepository, group_schema};
use crate::infrastructure::unique_index::UniqueIndex;

#[derive(Debug, Default)]
struct GroupStore {
    groups: HashMap<GroupId, Group>,
    index: UniqueIndex<GroupId>,
}

/// In-memory implementation of GroupRepository.
///
/// The blank group name is indexed like any other, so at most one group may
/// go unnamed.
#[derive(Debug, Default)]
pub struct InMemoryGroupRepository {
    store: Arc<RwLock<GroupStore>>,
}

impl InMemoryGroupRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn unique_values(group: &Group) -> Vec<(&'static str, &str)> {
    group_schema().unique_values(|field| group.field_value(field))
}

#[async_trait]
impl GroupRepository for InMemoryGroupRepository {
    async fn get(&self, id: &GroupId) -> Result<Option<Group>, DomainError> {
        Ok(self.store.read().await.groups.get(id).cloned())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Group>, DomainError> {
        let store = self.store.read().await;

        Ok(store
            .index
            .lookup(GROUP_NAME, name)
            .and_then(|id| store.groups.get(&id).cloned()))
    }

    async fn create(&self, group: Group) -> Result<Group, DomainError> {
        let mut store = self.store.write().await;
        let id = *group.id();

        if store.groups.contains_key(&id) {
            return Err(DomainError::uniqueness("id"));
        }

        let values = unique_values(&group);
        let conflicts = store.index.conflicts(&values, &id);

        if !conflicts.is_empty() {
            return Err(DomainError::Validation(conflicts));
        }

        store.index.insert(&values, id);
        store.groups.insert(id, group.clone());

        Ok(group)
    }

    async fn update(&self, group: Group) -> Result<Group, DomainError> {
        let mut store = self.store.write().await;
        let id = *group.id();

        if !store.groups.contains_key(&id) {
            return Err(DomainError::not_found(format!("Group '{}' not found", id)));
        }

        let values = unique_values(&group);
        let conflicts = store.index.conflicts(&values, &id);

        if !conflicts.is_empty() {
            return Err(DomainError::Validation(conflicts));
        }

        store.index.remove_owner(&id);
        store.index.insert(&values, id);
        store.groups.insert(id, group.clone());

        Ok(group)
    }

    async fn list(&self) -> Result<Vec<Group>, DomainError> {
        let store = self.store.read().await;

        let mut groups: Vec<Group> = store.groups.values().cloned().collect();
        groups.sort_by_key(|g| g.date_joined());

        Ok(groups)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.store.read().await.groups.len())
    }
}
