use async_trait::async_trait;
use chave_admin_domain::{DomainError, Permission};

/// Read-only lookup of permissions. Permissions are owned and mutated by
/// another module; user-group administration only references them.
#[async_trait]
pub trait PermissionRepository: Send + Sync {
    /// Retrieves a single permission by id, `Ok(None)` when unknown.
    async fn get_by_id(&self, id: i64) -> Result<Option<Permission>, DomainError>;

    /// Resolves a batch of permission ids.
    ///
    /// Returns the subset that exists; ids that resolve to nothing are
    /// silently dropped from the result. Callers linking permissions to a
    /// group rely on this: requesting a retired permission shrinks the set
    /// instead of failing the whole operation.
    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Permission>, DomainError>;
}
