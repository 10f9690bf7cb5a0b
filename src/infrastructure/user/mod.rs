//! User infrastructure module
//!
//! Argon2 password hashing, the in-memory user repository, and the user
//! service that creates and manages accounts.

mod password;
mod repository;
mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use repository::InMemoryUserRepository;
pub use service::{CreateUserRequest, UpdatePasswordRequest, UpdateProfileRequest, UserService};
