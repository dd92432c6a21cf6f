use async_trait::async_trait;
use chave_admin_application::ports::PermissionRepository;
use chave_admin_domain::{DomainError, Permission};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};

type PermissionRow = (i64, String, String, Option<String>);

/// Read-only SQLite lookup of permissions. The permission table itself is
/// owned by another module of the backend.
pub struct SqlitePermissionRepository {
    pool: SqlitePool,
}

impl SqlitePermissionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_permission(row: PermissionRow) -> Permission {
        let (id, name, key, description) = row;

        Permission {
            id,
            name: Arc::from(name.as_str()),
            key: Arc::from(key.as_str()),
            description: description.map(|s| Arc::from(s.as_str())),
        }
    }
}

#[async_trait]
impl PermissionRepository for SqlitePermissionRepository {
    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<Permission>, DomainError> {
        let row = sqlx::query_as::<_, PermissionRow>(
            "SELECT id, name, key, description FROM permissions WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query permission by id");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_permission))
    }

    #[instrument(skip(self))]
    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Permission>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!(
            "SELECT id, name, key, description FROM permissions
             WHERE id IN ({placeholders}) ORDER BY id"
        );

        let mut query = sqlx::query_as::<_, PermissionRow>(&sql);
        for id in ids {
            query = query.bind(id);
        }

        let rows = query.fetch_all(&self.pool).await.map_err(|e| {
            error!(error = %e, "Failed to query permissions by ids");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_permission).collect())
    }
}
