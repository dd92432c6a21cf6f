//! Configuration module for Chave Admin
//!
//! Configuration structures organized by concern:
//! - `root`: main configuration and CLI overrides
//! - `database`: SQLite database settings
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod database;
pub mod errors;
pub mod logging;
pub mod root;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
