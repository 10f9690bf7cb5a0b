//! User entity and related types

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{CELLPHONE, EMAIL, GROUP, USERNAME, user_schema};
use crate::domain::validator::FieldErrors;

/// User identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a fresh random ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role classification of an account, independent of permission checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Guest,
    #[default]
    Normal,
    Admin,
}

impl UserType {
    /// Integer code used by stored records
    pub fn code(&self) -> i32 {
        match self {
            Self::Guest => 0,
            Self::Normal => 1,
            Self::Admin => 2,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Guest),
            1 => Some(Self::Normal),
            2 => Some(Self::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guest => write!(f, "guest"),
            Self::Normal => write!(f, "normal"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

/// Account state derived from `is_active` and `frozen_time`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountState {
    /// Can authenticate
    Active,
    /// Inactive with a recorded freeze time
    Frozen,
    /// Inactive without a freeze time
    Deactivated,
}

impl AccountState {
    pub fn can_login(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Field values for a user that does not exist yet
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub username: String,
    pub email: Option<String>,
    pub cellphone: Option<String>,
    pub group: Option<String>,
    pub user_type: UserType,
}

impl NewUser {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: Some(email.into()),
            ..Self::default()
        }
    }

    pub fn with_cellphone(mut self, cellphone: impl Into<String>) -> Self {
        self.cellphone = Some(cellphone.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_user_type(mut self, user_type: UserType) -> Self {
        self.user_type = user_type;
        self
    }

    /// Run the user field table over these values
    pub fn validate(&self) -> FieldErrors {
        user_schema().validate([
            (USERNAME, Some(self.username.as_str())),
            (EMAIL, self.email.as_deref()),
            (CELLPHONE, self.cellphone.as_deref()),
            (GROUP, self.group.as_deref()),
        ])
    }
}

/// User account.
///
/// Serializes for output only; the password hash is never written out.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    id: UserId,
    username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    is_email_confirmed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    cellphone: Option<String>,
    /// Free-text group label, not a reference to a stored group
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<String>,
    date_joined: DateTime<Utc>,
    is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    frozen_time: Option<DateTime<Utc>>,
    user_type: UserType,
    /// Argon2 PHC string - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Create a user from validated field values and an already derived hash.
    ///
    /// Blank cellphone and group values are stored as absent.
    pub fn new(fields: NewUser, password_hash: impl Into<String>) -> Result<Self, FieldErrors> {
        fields.validate().into_result()?;

        Ok(Self {
            id: UserId::generate(),
            username: fields.username,
            email: fields.email,
            is_email_confirmed: false,
            cellphone: non_blank(fields.cellphone),
            group: non_blank(fields.group),
            date_joined: Utc::now(),
            is_active: true,
            frozen_time: None,
            user_type: fields.user_type,
            password_hash: password_hash.into(),
            last_login: None,
        })
    }

    // Getters

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn is_email_confirmed(&self) -> bool {
        self.is_email_confirmed
    }

    pub fn cellphone(&self) -> Option<&str> {
        self.cellphone.as_deref()
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn date_joined(&self) -> DateTime<Utc> {
        self.date_joined
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn frozen_time(&self) -> Option<DateTime<Utc>> {
        self.frozen_time
    }

    pub fn user_type(&self) -> UserType {
        self.user_type
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn last_login(&self) -> Option<DateTime<Utc>> {
        self.last_login
    }

    /// Users are identified by their username
    pub fn full_name(&self) -> &str {
        &self.username
    }

    pub fn short_name(&self) -> &str {
        &self.username
    }

    /// String value of a schema field, used for uniqueness checks
    pub fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            USERNAME => Some(self.username.as_str()),
            EMAIL => self.email.as_deref(),
            CELLPHONE => self.cellphone.as_deref(),
            GROUP => self.group.as_deref(),
            _ => None,
        }
    }

    // State

    pub fn state(&self) -> AccountState {
        match (self.is_active, self.frozen_time) {
            (true, _) => AccountState::Active,
            (false, Some(_)) => AccountState::Frozen,
            (false, None) => AccountState::Deactivated,
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.state() == AccountState::Frozen
    }

    /// Whether the account may authenticate
    pub fn can_login(&self) -> bool {
        self.state().can_login()
    }

    // Mutators

    /// Replace the email; a new address starts unconfirmed
    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), FieldErrors> {
        let email = email.into();
        user_schema()
            .validate([(EMAIL, Some(email.as_str()))])
            .into_result()?;

        if self.email.as_deref() != Some(email.as_str()) {
            self.email = Some(email);
            self.is_email_confirmed = false;
        }
        Ok(())
    }

    pub fn confirm_email(&mut self) {
        self.is_email_confirmed = true;
    }

    pub fn set_cellphone(&mut self, cellphone: Option<String>) -> Result<(), FieldErrors> {
        user_schema()
            .validate([(CELLPHONE, cellphone.as_deref())])
            .into_result()?;

        self.cellphone = non_blank(cellphone);
        Ok(())
    }

    pub fn set_group(&mut self, group: Option<String>) -> Result<(), FieldErrors> {
        user_schema()
            .validate([(GROUP, group.as_deref())])
            .into_result()?;

        self.group = non_blank(group);
        Ok(())
    }

    pub fn set_user_type(&mut self, user_type: UserType) {
        self.user_type = user_type;
    }

    pub fn set_password_hash(&mut self, password_hash: impl Into<String>) {
        self.password_hash = password_hash.into();
    }

    pub fn record_login(&mut self) {
        self.last_login = Some(Utc::now());
    }

    /// Administratively freeze the account; a deactivated account stays
    /// deactivated
    pub fn freeze(&mut self) {
        if self.state() == AccountState::Deactivated {
            return;
        }

        self.is_active = false;
        self.frozen_time = Some(Utc::now());
    }

    /// Lift a freeze; other states are left untouched
    pub fn unfreeze(&mut self) {
        if self.is_frozen() {
            self.is_active = true;
            self.frozen_time = None;
        }
    }

    /// Permanently disable the account
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.frozen_time = None;
    }

    pub fn activate(&mut self) {
        self.is_active = true;
        self.frozen_time = None;
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validator::ValidationErrorKind;

    fn create_test_user(username: &str) -> User {
        User::new(NewUser::new(username, "a@b.com"), "hashed_password").unwrap()
    }

    #[test]
    fn test_user_defaults() {
        let user = create_test_user("alice");

        assert_eq!(user.username(), "alice");
        assert_eq!(user.email(), Some("a@b.com"));
        assert!(!user.is_email_confirmed());
        assert!(user.cellphone().is_none());
        assert!(user.group().is_none());
        assert!(user.is_active());
        assert!(user.frozen_time().is_none());
        assert_eq!(user.user_type(), UserType::Normal);
        assert_eq!(user.state(), AccountState::Active);
        assert!(user.last_login().is_none());
        assert!(user.date_joined() <= Utc::now());
    }

    #[test]
    fn test_names_are_username() {
        let user = create_test_user("alice");

        assert_eq!(user.full_name(), "alice");
        assert_eq!(user.short_name(), "alice");
    }

    #[test]
    fn test_new_user_rejects_invalid_fields() {
        let fields = NewUser::new("ab", "nope").with_cellphone("123");
        let errors = User::new(fields, "hash").unwrap_err();

        assert!(errors.has(USERNAME, ValidationErrorKind::TooShort));
        assert!(errors.has(EMAIL, ValidationErrorKind::InvalidEmail));
        assert!(errors.has(CELLPHONE, ValidationErrorKind::InvalidCellphone));
    }

    #[test]
    fn test_blank_optional_fields_stored_as_absent() {
        let fields = NewUser::new("alice", "a@b.com")
            .with_cellphone("")
            .with_group("");
        let user = User::new(fields, "hash").unwrap();

        assert!(user.cellphone().is_none());
        assert!(user.group().is_none());
    }

    #[test]
    fn test_user_type_codes() {
        for user_type in [UserType::Guest, UserType::Normal, UserType::Admin] {
            assert_eq!(UserType::from_code(user_type.code()), Some(user_type));
        }
        assert_eq!(UserType::from_code(7), None);
        assert_eq!(UserType::default(), UserType::Normal);
    }

    #[test]
    fn test_freeze_and_unfreeze() {
        let mut user = create_test_user("alice");

        user.freeze();
        assert!(!user.is_active());
        assert!(user.frozen_time().is_some());
        assert_eq!(user.state(), AccountState::Frozen);
        assert!(!user.can_login());

        user.unfreeze();
        assert!(user.is_active());
        assert!(user.frozen_time().is_none());
        assert!(user.can_login());
    }

    #[test]
    fn test_unfreeze_leaves_deactivated_alone() {
        let mut user = create_test_user("alice");

        user.deactivate();
        assert_eq!(user.state(), AccountState::Deactivated);

        user.unfreeze();
        assert_eq!(user.state(), AccountState::Deactivated);

        user.activate();
        assert_eq!(user.state(), AccountState::Active);
    }

    #[test]
    fn test_freeze_leaves_deactivated_alone() {
        let mut user = create_test_user("alice");

        user.deactivate();
        user.freeze();
        assert_eq!(user.state(), AccountState::Deactivated);
        assert!(user.frozen_time().is_none());

        user.unfreeze();
        assert_eq!(user.state(), AccountState::Deactivated);
    }

    #[test]
    fn test_deactivate_clears_freeze() {
        let mut user = create_test_user("alice");

        user.freeze();
        user.deactivate();

        assert!(user.frozen_time().is_none());
        assert_eq!(user.state(), AccountState::Deactivated);
    }

    #[test]
    fn test_email_change_resets_confirmation() {
        let mut user = create_test_user("alice");

        user.confirm_email();
        assert!(user.is_email_confirmed());

        user.set_email("a@b.com").unwrap();
        assert!(user.is_email_confirmed());

        user.set_email("new@b.com").unwrap();
        assert_eq!(user.email(), Some("new@b.com"));
        assert!(!user.is_email_confirmed());

        assert!(user.set_email("broken").is_err());
        assert_eq!(user.email(), Some("new@b.com"));
    }

    #[test]
    fn test_set_cellphone() {
        let mut user = create_test_user("alice");

        user.set_cellphone(Some("13800138000".to_string())).unwrap();
        assert_eq!(user.cellphone(), Some("13800138000"));

        assert!(user.set_cellphone(Some("1380013800".to_string())).is_err());
        assert_eq!(user.cellphone(), Some("13800138000"));

        user.set_cellphone(None).unwrap();
        assert!(user.cellphone().is_none());
    }

    #[test]
    fn test_set_group_label() {
        let mut user = create_test_user("alice");

        user.set_group(Some("any label - not checked".to_string())).unwrap();
        assert_eq!(user.group(), Some("any label - not checked"));

        assert!(user.set_group(Some("g".repeat(255))).is_err());
    }

    #[test]
    fn test_field_value() {
        let user = User::new(
            NewUser::new("alice", "a@b.com").with_cellphone("13800138000"),
            "hash",
        )
        .unwrap();

        assert_eq!(user.field_value(USERNAME), Some("alice"));
        assert_eq!(user.field_value(EMAIL), Some("a@b.com"));
        assert_eq!(user.field_value(CELLPHONE), Some("13800138000"));
        assert_eq!(user.field_value(GROUP), None);
        assert_eq!(user.field_value("password"), None);
    }

    #[test]
    fn test_record_login() {
        let mut user = create_test_user("alice");

        user.record_login();
        assert!(user.last_login().is_some());
    }

    #[test]
    fn test_user_serialization_excludes_password() {
        let user = create_test_user("alice");

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("hashed_password"));
        assert!(!json.contains("password_hash"));
        assert!(json.contains("\"user_type\":\"normal\""));
    }
}
