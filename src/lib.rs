//! PIM user model
//!
//! User accounts and groups for a product information management system:
//! - Reusable field validators (byte/character length, name, cellphone,
//!   password and email rules)
//! - A schema table per entity, checked with every failure collected
//! - Account factory, freeze/deactivate lifecycle and Argon2 credentials
//! - In-memory stores enforcing unique usernames, emails, cellphones and
//!   group names

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
