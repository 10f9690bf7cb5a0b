//! Application configuration
//!
//! Layered from `config/default`, `config/local` and `APP__*` environment
//! variables, in that order.

mod app_config;

pub use app_config::{AppConfig, LogFormat, LoggingConfig, PasswordHashingConfig};
