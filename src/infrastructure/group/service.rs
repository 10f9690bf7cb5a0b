//! Group service for group management

use std::sync::Arc;

use tracing::info;

use crate::domain::DomainError;
use crate::domain::group::{Group, GroupId, GroupRepository};
use crate::domain::validator::FieldErrors;

/// Request for creating a new group
#[derive(Debug, Clone, Default)]
pub struct CreateGroupRequest {
    pub name: String,
    pub description: String,
}

/// Request for updating a group
#[derive(Debug, Clone, Default)]
pub struct UpdateGroupRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Group service for managing groups
#[derive(Debug)]
pub struct GroupService<R: GroupRepository> {
    repository: Arc<R>,
}

impl<R: GroupRepository> GroupService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new group
    pub async fn create(&self, request: CreateGroupRequest) -> Result<Group, DomainError> {
        info!(name = %request.name, "Creating group");

        let group = Group::new(request.name, request.description)?;
        self.repository.create(group).await
    }

    pub async fn get(&self, id: &GroupId) -> Result<Option<Group>, DomainError> {
        self.repository.get(id).await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<Group>, DomainError> {
        self.repository.get_by_name(name).await
    }

    /// List groups ordered by date joined
    pub async fn list(&self) -> Result<Vec<Group>, DomainError> {
        self.repository.list().await
    }

    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }

    /// Update a group's name and description, collecting every field error
    pub async fn update(
        &self,
        id: &GroupId,
        request: UpdateGroupRequest,
    ) -> Result<Group, DomainError> {
        info!(id = %id, "Updating group");

        let mut group = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Group '{}' not found", id)))?;

        let mut errors = FieldErrors::new();
        if let Some(name) = request.name {
            if let Err(e) = group.set_group_name(name) {
                errors.merge(e);
            }
        }
        if let Some(description) = request.description {
            if let Err(e) = group.set_description(description) {
                errors.merge(e);
            }
        }
        errors.into_result()?;

        self.repository.update(group).await
    }

    /// Rename a group
    pub async fn rename(&self, id: &GroupId, name: impl Into<String>) -> Result<Group, DomainError> {
        self.update(
            id,
            UpdateGroupRequest {
                name: Some(name.into()),
                description: None,
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::group::{DESCRIPTION, GROUP_NAME};
    use crate::domain::validator::ValidationErrorKind;
    use crate::infrastructure::group::InMemoryGroupRepository;

    fn create_service() -> GroupService<InMemoryGroupRepository> {
        GroupService::new(Arc::new(InMemoryGroupRepository::new()))
    }

    fn request(name: &str) -> CreateGroupRequest {
        CreateGroupRequest {
            name: name.to_string(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_group() {
        let service = create_service();

        let group = service.create(request("team_1")).await.unwrap();

        assert_eq!(group.group_name(), "team_1");
        assert_eq!(group.description(), "");
        assert!(service.get(group.id()).await.unwrap().is_some());
        assert!(service.get_by_name("team_1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_create_rejects_short_name() {
        let service = create_service();

        let err = service.create(request("ab")).await.unwrap_err();

        assert!(
            err.field_errors()
                .unwrap()
                .has(GROUP_NAME, ValidationErrorKind::TooShort)
        );
        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_collects_all_errors() {
        let service = create_service();

        let err = service
            .create(CreateGroupRequest {
                name: "a-".to_string(),
                description: "x".repeat(201),
            })
            .await
            .unwrap_err();
        let errors = err.field_errors().unwrap();

        assert!(errors.has(GROUP_NAME, ValidationErrorKind::InvalidCharacters));
        assert!(errors.has(GROUP_NAME, ValidationErrorKind::TooShort));
        assert!(errors.has(DESCRIPTION, ValidationErrorKind::TooLong));
    }

    #[tokio::test]
    async fn test_duplicate_and_blank_names() {
        let service = create_service();

        service.create(request("team_1")).await.unwrap();
        let err = service.create(request("team_1")).await.unwrap_err();
        assert!(err.is_uniqueness_violation());

        service.create(CreateGroupRequest::default()).await.unwrap();
        let err = service
            .create(CreateGroupRequest::default())
            .await
            .unwrap_err();
        assert!(
            err.field_errors()
                .unwrap()
                .has(GROUP_NAME, ValidationErrorKind::UniquenessViolation)
        );
        assert_eq!(service.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_group() {
        let service = create_service();
        let group = service.create(request("team_1")).await.unwrap();

        let updated = service
            .update(
                group.id(),
                UpdateGroupRequest {
                    name: None,
                    description: Some("Operations".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.group_name(), "team_1");
        assert_eq!(updated.description(), "Operations");
    }

    #[tokio::test]
    async fn test_rename() {
        let service = create_service();
        let group = service.create(request("team_1")).await.unwrap();
        service.create(request("team_2")).await.unwrap();

        let err = service.rename(group.id(), "team_2").await.unwrap_err();
        assert!(err.is_uniqueness_violation());

        let err = service.rename(group.id(), "ab").await.unwrap_err();
        assert!(
            err.field_errors()
                .unwrap()
                .has(GROUP_NAME, ValidationErrorKind::TooShort)
        );

        let renamed = service.rename(group.id(), "team_3").await.unwrap();
        assert_eq!(renamed.group_name(), "team_3");
        assert!(service.get_by_name("team_1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_group() {
        let service = create_service();

        let result = service.rename(&GroupId::generate(), "team_1").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
