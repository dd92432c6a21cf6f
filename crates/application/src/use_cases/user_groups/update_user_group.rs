use chave_admin_domain::{to_key, DomainError, UserGroup};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{PermissionRepository, UserGroupRepository};

/// Use case for updating a user group.
///
/// Validation order: id, existence, name, key collision. The permission set
/// is then reconciled against the stored one and the repository applies the
/// field changes plus both link deltas in a single transaction.
pub struct UpdateUserGroupUseCase {
    group_repo: Arc<dyn UserGroupRepository>,
    permission_repo: Arc<dyn PermissionRepository>,
}

impl UpdateUserGroupUseCase {
    pub fn new(
        group_repo: Arc<dyn UserGroupRepository>,
        permission_repo: Arc<dyn PermissionRepository>,
    ) -> Self {
        Self {
            group_repo,
            permission_repo,
        }
    }

    /// Updates name, key, description and the linked permission set.
    ///
    /// The final permission set equals the requested one intersected with
    /// the permissions that actually exist; removals and additions touch
    /// disjoint id sets, so the operation is idempotent.
    ///
    /// # Errors
    ///
    /// * `DomainError::IdInvalid` - If `id` is not a positive id
    /// * `DomainError::UserGroupNotFound` - If the group doesn't exist
    /// * `DomainError::NameRequired` - If the new name is blank
    /// * `DomainError::KeyAlreadyExists` - If the new key belongs to a
    ///   different group (keeping one's own key is fine)
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        id: i64,
        name: String,
        description: Option<String>,
        permission_ids: Vec<i64>,
    ) -> Result<UserGroup, DomainError> {
        if id <= 0 {
            return Err(DomainError::IdInvalid(id));
        }

        let existing = self
            .group_repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::UserGroupNotFound(id))?;

        UserGroup::validate_name(&name)?;

        // Equal names always normalize to equal keys, so this check also
        // covers plain name collisions.
        let key = to_key(&name);
        if let Some(other) = self.group_repo.get_by_key(&key).await? {
            if other.id != Some(id) {
                return Err(DomainError::KeyAlreadyExists(key));
            }
        }

        let current = existing.permission_ids();
        let requested: BTreeSet<i64> = permission_ids.into_iter().collect();

        let removed: Vec<i64> = current.difference(&requested).copied().collect();
        let added_candidates: Vec<i64> = requested.difference(&current).copied().collect();

        // Unknown ids are dropped, same policy as Create.
        let added: Vec<i64> = self
            .permission_repo
            .get_by_ids(&added_candidates)
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect();

        let group = self
            .group_repo
            .update(id, name, key, description, &added, &removed)
            .await?;

        info!(
            group_id = id,
            name = %group.name,
            added = added.len(),
            removed = removed.len(),
            "User group updated successfully"
        );

        Ok(group)
    }
}
