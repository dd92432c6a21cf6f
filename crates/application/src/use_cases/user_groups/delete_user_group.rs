use chave_admin_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::UserGroupRepository;

pub struct DeleteUserGroupUseCase {
    group_repo: Arc<dyn UserGroupRepository>,
}

impl DeleteUserGroupUseCase {
    pub fn new(group_repo: Arc<dyn UserGroupRepository>) -> Self {
        Self { group_repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<(), DomainError> {
        if id <= 0 {
            return Err(DomainError::IdInvalid(id));
        }

        let group = self
            .group_repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::UserGroupNotFound(id))?;

        self.group_repo.delete(id).await?;

        info!(
            group_id = id,
            name = %group.name,
            "User group deleted successfully"
        );

        Ok(())
    }
}
