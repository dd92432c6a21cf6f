use async_trait::async_trait;
use chave_admin_application::ports::UserGroupRepository;
use chave_admin_domain::{DomainError, Permission, UserGroup, UserGroupSummary};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};

type GroupRow = (i64, String, String, Option<String>, String, String);
type PermissionRow = (i64, String, String, Option<String>);
type SummaryRow = (i64, String, String, Option<String>);

pub struct SqliteUserGroupRepository {
    pool: SqlitePool,
}

impl SqliteUserGroupRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_group(row: GroupRow, permissions: Vec<Permission>) -> UserGroup {
        let (id, name, key, description, created_at, updated_at) = row;

        UserGroup {
            id: Some(id),
            name: Arc::from(name.as_str()),
            key: Arc::from(key.as_str()),
            description: description.map(|s| Arc::from(s.as_str())),
            permissions,
            created_at: Some(created_at),
            updated_at: Some(updated_at),
        }
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

    /// Re-surfaces a lost uniqueness race as the same validation error the
    /// pre-write checks would have produced.
    fn map_write_error(e: sqlx::Error, name: &str, key: &str) -> DomainError {
        let msg = e.to_string();
        if msg.contains("UNIQUE constraint failed: user_groups.name") {
            DomainError::NameAlreadyExists(name.to_string())
        } else if msg.contains("UNIQUE constraint failed: user_groups.key") {
            DomainError::KeyAlreadyExists(key.to_string())
        } else {
            error!(error = %msg, "Failed to write user group");
            DomainError::DatabaseError(msg)
        }
    }

    async fn load_permissions(&self, group_id: i64) -> Result<Vec<Permission>, DomainError> {
        let rows = sqlx::query_as::<_, PermissionRow>(
            "SELECT p.id, p.name, p.key, p.description
             FROM permissions p
             JOIN user_group_permissions ugp ON ugp.permission_id = p.id
             WHERE ugp.user_group_id = ?
             ORDER BY p.id",
        )
        .bind(group_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to load group permissions");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_permission).collect())
    }

    async fn fetch_group(
        &self,
        column: &str,
        query: &str,
    ) -> Result<Option<UserGroup>, DomainError> {
        let sql = format!(
            "SELECT id, name, key, description, created_at, updated_at
             FROM user_groups WHERE {column} = ?"
        );

        let row = sqlx::query_as::<_, GroupRow>(&sql)
            .bind(query)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query user group");
                DomainError::DatabaseError(e.to_string())
            })?;

        match row {
            Some(row) => {
                let permissions = self.load_permissions(row.0).await?;
                Ok(Some(Self::row_to_group(row, permissions)))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UserGroupRepository for SqliteUserGroupRepository {
    #[instrument(skip(self))]
    async fn create(
        &self,
        name: String,
        key: String,
        description: Option<String>,
        permission_ids: &[i64],
    ) -> Result<UserGroup, DomainError> {
        let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let mut tx = self.pool.begin().await.map_err(|e| {
            error!(error = %e, "Failed to begin transaction");
            DomainError::DatabaseError(e.to_string())
        })?;

        let result = sqlx::query(
            "INSERT INTO user_groups (name, key, description, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&name)
        .bind(&key)
        .bind(&description)
        .bind(&now)
        .bind(&now)
        .execute(&mut *tx)
        .await
        .map_err(|e| Self::map_write_error(e, &name, &key))?;

        let id = result.last_insert_rowid();

        for permission_id in permission_ids {
            sqlx::query(
                "INSERT INTO user_group_permissions (user_group_id, permission_id, created_at)
                 VALUES (?, ?, ?)",
            )
            .bind(id)
            .bind(permission_id)
            .bind(&now)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to link permission");
                DomainError::DatabaseError(e.to_string())
            })?;
        }

        tx.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit user group creation");
            DomainError::DatabaseError(e.to_string())
        })?;

        self.get_by_id(id).await?.ok_or_else(|| {
            DomainError::DatabaseError("Failed to fetch created user group".to_string())
        })
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<UserGroup>, DomainError> {
        let row = sqlx::query_as::<_, GroupRow>(
            "SELECT id, name, key, description, created_at, updated_at
             FROM user_groups WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query user group by id");
            DomainError::DatabaseError(e.to_string())
        })?;

        match row {
            Some(row) => {
                let permissions = self.load_permissions(id).await?;
                Ok(Some(Self::row_to_group(row, permissions)))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn get_by_name(&self, name: &str) -> Result<Option<UserGroup>, DomainError> {
        self.fetch_group("name", name).await
    }

    #[instrument(skip(self))]
    async fn get_by_key(&self, key: &str) -> Result<Option<UserGroup>, DomainError> {
        self.fetch_group("key", key).await
    }

    #[instrument(skip(self))]
    async fn get_summaries(&self) -> Result<Vec<UserGroupSummary>, DomainError> {
        let rows = sqlx::query_as::<_, SummaryRow>(
            "SELECT id, name, key, description FROM user_groups ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query user group summaries");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows
            .into_iter()
            .map(|(id, name, key, description)| UserGroupSummary {
                id,
                name,
                key,
                description,
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn update(
        &self,
        id: i64,
        name: String,
        key: String,
        description: Option<String>,
        added: &[i64],
        removed: &[i64],
    ) -> Result<UserGroup, DomainError> {
        let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let mut tx = self.pool.begin().await.map_err(|e| {
            error!(error = %e, "Failed to begin transaction");
            DomainError::DatabaseError(e.to_string())
        })?;

        let result = sqlx::query(
            "UPDATE user_groups SET name = ?, key = ?, description = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&name)
        .bind(&key)
        .bind(&description)
        .bind(&now)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| Self::map_write_error(e, &name, &key))?;

        if result.rows_affected() == 0 {
            // Dropping the transaction rolls it back.
            return Err(DomainError::UserGroupNotFound(id));
        }

        if !removed.is_empty() {
            let placeholders = vec!["?"; removed.len()].join(", ");
            let sql = format!(
                "DELETE FROM user_group_permissions
                 WHERE user_group_id = ? AND permission_id IN ({placeholders})"
            );

            let mut query = sqlx::query(&sql).bind(id);
            for permission_id in removed {
                query = query.bind(permission_id);
            }
            query.execute(&mut *tx).await.map_err(|e| {
                error!(error = %e, "Failed to unlink permissions");
                DomainError::DatabaseError(e.to_string())
            })?;
        }

        for permission_id in added {
            sqlx::query(
                "INSERT INTO user_group_permissions (user_group_id, permission_id, created_at)
                 VALUES (?, ?, ?)",
            )
            .bind(id)
            .bind(permission_id)
            .bind(&now)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to link permission");
                DomainError::DatabaseError(e.to_string())
            })?;
        }

        tx.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit user group update");
            DomainError::DatabaseError(e.to_string())
        })?;

        self.get_by_id(id)
            .await?
            .ok_or(DomainError::UserGroupNotFound(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM user_groups WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete user group");
                DomainError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserGroupNotFound(id));
        }

        Ok(())
    }
}
