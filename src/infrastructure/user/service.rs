//! User service: account factory, authentication and account lifecycle

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::DomainError;
use crate::domain::user::{
    AccountState, EMAIL, NewUser, PASSWORD, USERNAME, User, UserRepository, UserType,
    validate_password,
};
use crate::domain::validator::FieldErrors;

use super::password::PasswordHasher;

/// Request for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub cellphone: Option<String>,
    pub user_type: UserType,
}

impl CreateUserRequest {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: email.into(),
            cellphone: None,
            user_type: UserType::default(),
        }
    }

    pub fn with_cellphone(mut self, cellphone: impl Into<String>) -> Self {
        self.cellphone = Some(cellphone.into());
        self
    }

    pub fn with_user_type(mut self, user_type: UserType) -> Self {
        self.user_type = user_type;
        self
    }

    /// Names of the required fields left empty
    fn missing_fields(&self) -> Vec<&'static str> {
        [
            (USERNAME, &self.username),
            (PASSWORD, &self.password),
            (EMAIL, &self.email),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

/// Request for updating contact and group fields.
///
/// `None` leaves a field untouched; an empty string clears an optional one.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileRequest {
    pub email: Option<String>,
    pub cellphone: Option<String>,
    pub group: Option<String>,
}

/// Request for updating a user's password
#[derive(Debug, Clone)]
pub struct UpdatePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// User service for account creation and management
#[derive(Debug)]
pub struct UserService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository, H: PasswordHasher + 'static> UserService<R, H> {
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Create a new user.
    ///
    /// Returns `Ok(None)` without touching the store when the username,
    /// password or email is empty. Otherwise every field is validated and
    /// all failures are returned together; store uniqueness conflicts come
    /// back as `DomainError::Validation` as well.
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<Option<User>, DomainError> {
        let missing = request.missing_fields();
        if !missing.is_empty() {
            warn!(?missing, "Skipping user creation, required fields are empty");
            return Ok(None);
        }

        info!(username = %request.username, user_type = %request.user_type, "Creating user");

        let mut fields = NewUser::new(&request.username, &request.email)
            .with_user_type(request.user_type);
        if let Some(cellphone) = request.cellphone {
            fields = fields.with_cellphone(cellphone);
        }

        let mut errors = fields.validate();
        if let Err(e) = validate_password(&request.password) {
            errors.add(PASSWORD, e);
        }
        errors.into_result()?;

        let password_hash = self.hash_password(request.password).await?;
        let user = User::new(fields, password_hash)?;

        self.repository.create(user).await.map(Some)
    }

    /// Alias of [`Self::create_user`]
    pub async fn create(&self, request: CreateUserRequest) -> Result<Option<User>, DomainError> {
        self.create_user(request).await
    }

    /// Authenticate a user with username and password.
    ///
    /// Unknown users, frozen or deactivated accounts and wrong passwords all
    /// yield `Ok(None)`.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        let Some(user) = self.repository.get_by_username(username).await? else {
            debug!(username, "Authentication failed, unknown user");
            return Ok(None);
        };

        if !user.can_login() {
            debug!(username, state = ?user.state(), "Authentication refused, account inactive");
            return Ok(None);
        }

        if !self.verify_password(password, user.password_hash()).await? {
            debug!(username, "Authentication failed, wrong password");
            return Ok(None);
        }

        self.repository.record_login(user.id()).await?;
        self.repository.get(user.id()).await
    }

    /// Get a user by username
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.repository.get_by_username(username).await
    }

    /// List users ordered by date joined
    pub async fn list(&self, state: Option<AccountState>) -> Result<Vec<User>, DomainError> {
        self.repository.list(state).await
    }

    pub async fn count(&self, state: Option<AccountState>) -> Result<usize, DomainError> {
        self.repository.count(state).await
    }

    /// Update email, cellphone and group, collecting every field error
    pub async fn update_profile(
        &self,
        username: &str,
        request: UpdateProfileRequest,
    ) -> Result<User, DomainError> {
        let mut user = self.require(username).await?;
        let mut errors = FieldErrors::new();

        if let Some(email) = request.email {
            if let Err(e) = user.set_email(email) {
                errors.merge(e);
            }
        }
        if let Some(cellphone) = request.cellphone {
            if let Err(e) = user.set_cellphone(Some(cellphone)) {
                errors.merge(e);
            }
        }
        if let Some(group) = request.group {
            if let Err(e) = user.set_group(Some(group)) {
                errors.merge(e);
            }
        }
        errors.into_result()?;

        self.repository.update(&user).await
    }

    /// Change a user's password after checking the current one
    pub async fn update_password(
        &self,
        username: &str,
        request: UpdatePasswordRequest,
    ) -> Result<User, DomainError> {
        let mut user = self.require(username).await?;

        if !self
            .verify_password(&request.current_password, user.password_hash())
            .await?
        {
            return Err(DomainError::credential("Current password is incorrect"));
        }

        validate_password(&request.new_password)
            .map_err(|e| FieldErrors::single(PASSWORD, e))?;

        let new_hash = self.hash_password(request.new_password).await?;
        user.set_password_hash(new_hash);

        self.repository.update(&user).await
    }

    pub async fn set_user_type(&self, username: &str, user_type: UserType) -> Result<User, DomainError> {
        let mut user = self.require(username).await?;
        user.set_user_type(user_type);
        self.repository.update(&user).await
    }

    pub async fn confirm_email(&self, username: &str) -> Result<User, DomainError> {
        let mut user = self.require(username).await?;

        if user.email().is_none() {
            return Err(DomainError::invalid_state(format!(
                "User '{}' has no email to confirm",
                username
            )));
        }

        user.confirm_email();
        self.repository.update(&user).await
    }

    /// Freeze an account, recording the freeze time
    pub async fn freeze(&self, username: &str) -> Result<User, DomainError> {
        info!(username, "Freezing user");

        let mut user = self.require(username).await?;

        if user.state() == AccountState::Deactivated {
            return Err(DomainError::invalid_state("Deactivated users cannot be frozen"));
        }

        user.freeze();
        self.repository.update(&user).await
    }

    /// Lift a freeze
    pub async fn unfreeze(&self, username: &str) -> Result<User, DomainError> {
        info!(username, "Unfreezing user");

        let mut user = self.require(username).await?;

        if !user.is_frozen() {
            return Err(DomainError::invalid_state("Only frozen users can be unfrozen"));
        }

        user.unfreeze();
        self.repository.update(&user).await
    }

    /// Permanently disable an account
    pub async fn deactivate(&self, username: &str) -> Result<User, DomainError> {
        info!(username, "Deactivating user");

        let mut user = self.require(username).await?;
        user.deactivate();
        self.repository.update(&user).await
    }

    pub async fn activate(&self, username: &str) -> Result<User, DomainError> {
        info!(username, "Activating user");

        let mut user = self.require(username).await?;
        user.activate();
        self.repository.update(&user).await
    }

    /// Physically delete a user
    pub async fn delete(&self, username: &str) -> Result<bool, DomainError> {
        info!(username, "Deleting user");

        match self.repository.get_by_username(username).await? {
            Some(user) => self.repository.delete(user.id()).await,
            None => Ok(false),
        }
    }

    /// Argon2 runs on the blocking pool, off the async workers
    async fn hash_password(&self, password: String) -> Result<String, DomainError> {
        let hasher = Arc::clone(&self.hasher);

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::credential(format!("Hashing task failed: {}", e)))?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| DomainError::credential(format!("Verification task failed: {}", e)))
    }

    async fn require(&self, username: &str) -> Result<User, DomainError> {
        self.repository
            .get_by_username(username)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", username)))
    }
}
