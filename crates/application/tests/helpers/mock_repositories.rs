#![allow(dead_code)]

use async_trait::async_trait;
use chave_admin_application::ports::{PermissionRepository, UserGroupRepository};
use chave_admin_domain::{DomainError, Permission, UserGroup, UserGroupSummary};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock PermissionRepository
// ============================================================================

#[derive(Clone)]
pub struct MockPermissionRepository {
    permissions: Arc<RwLock<HashMap<i64, Permission>>>,
}

impl MockPermissionRepository {
    pub fn new() -> Self {
        Self {
            permissions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Cria mock já populado com as permissões informadas
    pub fn with_permissions(ids: Vec<(i64, &str)>) -> Self {
        let map = ids
            .into_iter()
            .map(|(id, name)| {
                (
                    id,
                    Permission {
                        id,
                        name: Arc::from(name),
                        key: Arc::from(chave_admin_domain::to_key(name).as_str()),
                        description: None,
                    },
                )
            })
            .collect();

        Self {
            permissions: Arc::new(RwLock::new(map)),
        }
    }

    pub async fn count(&self) -> usize {
        self.permissions.read().await.len()
    }
}

impl Default for MockPermissionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PermissionRepository for MockPermissionRepository {
    async fn get_by_id(&self, id: i64) -> Result<Option<Permission>, DomainError> {
        Ok(self.permissions.read().await.get(&id).cloned())
    }

    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Permission>, DomainError> {
        let permissions = self.permissions.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| permissions.get(id).cloned())
            .collect())
    }
}

// ============================================================================
// Mock UserGroupRepository
// ============================================================================

#[derive(Clone)]
pub struct MockUserGroupRepository {
    groups: Arc<RwLock<Vec<UserGroup>>>,
    next_id: Arc<AtomicI64>,
    link_adds: Arc<AtomicI64>,
    link_removes: Arc<AtomicI64>,
}

impl MockUserGroupRepository {
    pub fn new() -> Self {
        Self {
            groups: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(1)),
            link_adds: Arc::new(AtomicI64::new(0)),
            link_removes: Arc::new(AtomicI64::new(0)),
        }
    }

    /// Retorna quantidade de grupos armazenados
    pub async fn count(&self) -> usize {
        self.groups.read().await.len()
    }

    /// Link operations applied by `update` so far: (additions, removals).
    pub fn link_ops(&self) -> (i64, i64) {
        (
            self.link_adds.load(Ordering::SeqCst),
            self.link_removes.load(Ordering::SeqCst),
        )
    }

    pub fn reset_link_ops(&self) {
        self.link_adds.store(0, Ordering::SeqCst);
        self.link_removes.store(0, Ordering::SeqCst);
    }

    fn placeholder_permission(id: i64) -> Permission {
        Permission {
            id,
            name: Arc::from(format!("permission-{id}").as_str()),
            key: Arc::from(format!("permission-{id}").as_str()),
            description: None,
        }
    }

    fn now() -> String {
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

impl Default for MockUserGroupRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserGroupRepository for MockUserGroupRepository {
    async fn create(
        &self,
        name: String,
        key: String,
        description: Option<String>,
        permission_ids: &[i64],
    ) -> Result<UserGroup, DomainError> {
        let mut groups = self.groups.write().await;

        // Storage-level uniqueness backstop, same surface as the SQLite
        // UNIQUE constraints.
        if groups.iter().any(|g| g.name.as_ref() == name) {
            return Err(DomainError::NameAlreadyExists(name));
        }
        if groups.iter().any(|g| g.key.as_ref() == key) {
            return Err(DomainError::KeyAlreadyExists(key));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut group = UserGroup::new(
            Some(id),
            Arc::from(name.as_str()),
            Arc::from(key.as_str()),
            description.map(|s| Arc::from(s.as_str())),
            permission_ids
                .iter()
                .map(|&pid| Self::placeholder_permission(pid))
                .collect(),
        );
        group.created_at = Some(Self::now());
        group.updated_at = Some(Self::now());

        groups.push(group.clone());
        Ok(group)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<UserGroup>, DomainError> {
        let groups = self.groups.read().await;
        Ok(groups.iter().find(|g| g.id == Some(id)).cloned())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<UserGroup>, DomainError> {
        let groups = self.groups.read().await;
        Ok(groups.iter().find(|g| g.name.as_ref() == name).cloned())
    }

    async fn get_by_key(&self, key: &str) -> Result<Option<UserGroup>, DomainError> {
        let groups = self.groups.read().await;
        Ok(groups.iter().find(|g| g.key.as_ref() == key).cloned())
    }

    async fn get_summaries(&self) -> Result<Vec<UserGroupSummary>, DomainError> {
        let groups = self.groups.read().await;
        Ok(groups
            .iter()
            .map(|g| UserGroupSummary {
                id: g.id.unwrap_or(0),
                name: g.name.to_string(),
                key: g.key.to_string(),
                description: g.description.as_ref().map(|s| s.to_string()),
            })
            .collect())
    }

    async fn update(
        &self,
        id: i64,
        name: String,
        key: String,
        description: Option<String>,
        added: &[i64],
        removed: &[i64],
    ) -> Result<UserGroup, DomainError> {
        let mut groups = self.groups.write().await;

        let group = groups
            .iter_mut()
            .find(|g| g.id == Some(id))
            .ok_or(DomainError::UserGroupNotFound(id))?;

        group.name = Arc::from(name.as_str());
        group.key = Arc::from(key.as_str());
        group.description = description.map(|s| Arc::from(s.as_str()));
        group.permissions.retain(|p| !removed.contains(&p.id));
        for &pid in added {
            group.permissions.push(Self::placeholder_permission(pid));
        }
        group.updated_at = Some(Self::now());

        self.link_adds.fetch_add(added.len() as i64, Ordering::SeqCst);
        self.link_removes
            .fetch_add(removed.len() as i64, Ordering::SeqCst);

        Ok(group.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut groups = self.groups.write().await;
        let before = groups.len();
        groups.retain(|g| g.id != Some(id));

        if groups.len() == before {
            return Err(DomainError::UserGroupNotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_permission_lookup_drops_unknown_ids() {
        let repo = MockPermissionRepository::with_permissions(vec![(1, "users.read")]);

        let found = repo.get_by_ids(&[1, 99]).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[tokio::test]
    async fn test_mock_group_round_trip() {
        let repo = MockUserGroupRepository::new();

        let created = repo
            .create("Admins".to_string(), "admins".to_string(), None, &[1, 2])
            .await
            .unwrap();

        let fetched = repo.get_by_id(created.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(fetched.name.as_ref(), "Admins");
        assert_eq!(fetched.permissions.len(), 2);
        assert_eq!(repo.count().await, 1);
    }
}
