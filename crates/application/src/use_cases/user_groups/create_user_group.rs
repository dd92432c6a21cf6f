use chave_admin_domain::{to_key, DomainError, UserGroup};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{PermissionRepository, UserGroupRepository};

pub struct CreateUserGroupUseCase {
    group_repo: Arc<dyn UserGroupRepository>,
    permission_repo: Arc<dyn PermissionRepository>,
}

impl CreateUserGroupUseCase {
    pub fn new(
        group_repo: Arc<dyn UserGroupRepository>,
        permission_repo: Arc<dyn PermissionRepository>,
    ) -> Self {
        Self {
            group_repo,
            permission_repo,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        name: String,
        description: Option<String>,
        permission_ids: Vec<i64>,
    ) -> Result<UserGroup, DomainError> {
        UserGroup::validate_name(&name)?;

        if self.group_repo.get_by_name(&name).await?.is_some() {
            return Err(DomainError::NameAlreadyExists(name));
        }

        let key = to_key(&name);
        if self.group_repo.get_by_key(&key).await?.is_some() {
            return Err(DomainError::KeyAlreadyExists(key));
        }

        // Unknown ids are dropped, see PermissionRepository::get_by_ids.
        let requested: Vec<i64> = permission_ids
            .into_iter()
            .collect::<BTreeSet<i64>>()
            .into_iter()
            .collect();
        let resolved: Vec<i64> = self
            .permission_repo
            .get_by_ids(&requested)
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect();

        let group = self
            .group_repo
            .create(name, key, description, &resolved)
            .await?;

        info!(
            group_id = ?group.id,
            name = %group.name,
            permissions = resolved.len(),
            "User group created successfully"
        );

        Ok(group)
    }
}
