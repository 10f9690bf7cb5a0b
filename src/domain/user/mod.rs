//! User domain
//!
//! User accounts, their field table, the derived account state, and the
//! repository trait the account services persist through.

mod entity;
mod repository;
mod validation;

pub use entity::{AccountState, NewUser, User, UserId, UserType};
pub use repository::UserRepository;
pub use validation::{
    CELLPHONE, EMAIL, GROUP, MAX_CELLPHONE_LENGTH, MAX_EMAIL_LENGTH, MAX_GROUP_LENGTH,
    MAX_USERNAME_LENGTH, MIN_USERNAME_BYTES, PASSWORD, USERNAME, user_schema, validate_password,
    validate_username,
};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
