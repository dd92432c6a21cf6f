use chave_admin_application::use_cases::{
    CreateUserGroupUseCase, DeleteUserGroupUseCase, GetUserGroupsUseCase, UpdateUserGroupUseCase,
};

use super::Repositories;

pub struct UseCases {
    pub create_user_group: CreateUserGroupUseCase,
    pub get_user_groups: GetUserGroupsUseCase,
    pub update_user_group: UpdateUserGroupUseCase,
    pub delete_user_group: DeleteUserGroupUseCase,
}

impl UseCases {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            create_user_group: CreateUserGroupUseCase::new(
                repos.user_groups.clone(),
                repos.permissions.clone(),
            ),
            get_user_groups: GetUserGroupsUseCase::new(repos.user_groups.clone()),
            update_user_group: UpdateUserGroupUseCase::new(
                repos.user_groups.clone(),
                repos.permissions.clone(),
            ),
            delete_user_group: DeleteUserGroupUseCase::new(repos.user_groups.clone()),
        }
    }
}
