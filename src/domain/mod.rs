//! Domain layer - entities, field tables and validation rules

pub mod error;
pub mod group;
pub mod schema;
pub mod user;
pub mod validator;

pub use error::DomainError;
pub use group::{Group, GroupId, GroupRepository};
pub use user::{AccountState, NewUser, User, UserId, UserRepository, UserType};
