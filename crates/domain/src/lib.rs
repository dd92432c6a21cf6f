//! Chave Admin Domain Layer
pub mod config;
pub mod errors;
pub mod key;
pub mod permission;
pub mod user_group;

pub use config::{CliOverrides, Config, ConfigError, DatabaseConfig, LoggingConfig};
pub use errors::DomainError;
pub use key::to_key;
pub use permission::Permission;
pub use user_group::{UserGroup, UserGroupDetail, UserGroupSummary};
