use async_trait::async_trait;
use chave_admin_domain::{DomainError, UserGroup, UserGroupSummary};

/// Repository interface for user groups.
///
/// This trait defines the contract for data access operations on user
/// groups. Every mutating method runs as a single transaction: either all of
/// its writes commit or none do. Read methods return `Ok(None)` on no match,
/// never an error.
#[async_trait]
pub trait UserGroupRepository: Send + Sync {
    /// Creates a new user group together with its permission links.
    ///
    /// # Arguments
    ///
    /// * `name` - The group name (must be unique)
    /// * `key` - The normalized lookup key (must be unique)
    /// * `description` - Optional free text
    /// * `permission_ids` - Ids of permissions to link, already resolved
    ///
    /// # Returns
    ///
    /// * `Ok(UserGroup)` - The created group with generated id, timestamps
    ///   and loaded permissions
    /// * `Err(DomainError)` - If creation fails
    ///
    /// # Errors
    ///
    /// * `DomainError::NameAlreadyExists` - If the name lost a uniqueness
    ///   race and hit the storage constraint
    /// * `DomainError::KeyAlreadyExists` - Same, for the key column
    /// * `DomainError::DatabaseError` - If a database error occurs
    async fn create(
        &self,
        name: String,
        key: String,
        description: Option<String>,
        permission_ids: &[i64],
    ) -> Result<UserGroup, DomainError>;

    /// Retrieves a user group by id with its permissions eagerly loaded.
    async fn get_by_id(&self, id: i64) -> Result<Option<UserGroup>, DomainError>;

    /// Retrieves a user group by its exact display name.
    async fn get_by_name(&self, name: &str) -> Result<Option<UserGroup>, DomainError>;

    /// Retrieves a user group by its normalized key.
    async fn get_by_key(&self, key: &str) -> Result<Option<UserGroup>, DomainError>;

    /// Retrieves all groups as lightweight projections, without touching
    /// the permission join table. Ordering is not significant.
    async fn get_summaries(&self) -> Result<Vec<UserGroupSummary>, DomainError>;

    /// Applies an update: new name/key/description plus two disjoint sets
    /// of permission-link deltas, in one transaction.
    ///
    /// # Arguments
    ///
    /// * `id` - The group id
    /// * `name` / `key` / `description` - Replacement field values
    /// * `added` - Permission ids to link (already resolved, not currently
    ///   linked)
    /// * `removed` - Permission ids to unlink (currently linked)
    ///
    /// # Errors
    ///
    /// * `DomainError::UserGroupNotFound` - If the group doesn't exist
    /// * `DomainError::KeyAlreadyExists` - If the key lost a uniqueness race
    /// * `DomainError::DatabaseError` - If a database error occurs
    async fn update(
        &self,
        id: i64,
        name: String,
        key: String,
        description: Option<String>,
        added: &[i64],
        removed: &[i64],
    ) -> Result<UserGroup, DomainError>;

    /// Deletes a user group; permission links cascade at the storage layer.
    ///
    /// # Errors
    ///
    /// * `DomainError::UserGroupNotFound` - If no row was deleted
    /// * `DomainError::DatabaseError` - If a database error occurs
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
