use chave_admin_domain::{DomainError, UserGroupDetail, UserGroupSummary};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::UserGroupRepository;

/// Use case for retrieving user groups.
///
/// Provides the list projection and the single-group detail response.
pub struct GetUserGroupsUseCase {
    group_repo: Arc<dyn UserGroupRepository>,
}

impl GetUserGroupsUseCase {
    pub fn new(group_repo: Arc<dyn UserGroupRepository>) -> Self {
        Self { group_repo }
    }

    /// Retrieves all user groups as lightweight summaries, without
    /// permission detail. No filtering or pagination.
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<UserGroupSummary>, DomainError> {
        self.group_repo.get_summaries().await
    }

    /// Retrieves one user group with the ids of its permissions.
    ///
    /// # Errors
    ///
    /// * `DomainError::UserGroupNotFound` - If no group has this id
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<UserGroupDetail, DomainError> {
        let group = self
            .group_repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::UserGroupNotFound(id))?;

        Ok(UserGroupDetail::from_group(group))
    }
}
