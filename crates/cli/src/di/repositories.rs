use chave_admin_application::ports::{PermissionRepository, UserGroupRepository};
use chave_admin_infrastructure::repositories::{
    SqlitePermissionRepository, SqliteUserGroupRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Concrete repository instances behind their port traits. Everything
/// downstream receives these by constructor injection.
pub struct Repositories {
    pub user_groups: Arc<dyn UserGroupRepository>,
    pub permissions: Arc<dyn PermissionRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            user_groups: Arc::new(SqliteUserGroupRepository::new(pool.clone())),
            permissions: Arc::new(SqlitePermissionRepository::new(pool)),
        }
    }
}
