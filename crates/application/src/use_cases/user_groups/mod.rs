mod create_user_group;
mod delete_user_group;
mod get_user_groups;
mod update_user_group;

pub use create_user_group::CreateUserGroupUseCase;
pub use delete_user_group::DeleteUserGroupUseCase;
pub use get_user_groups::GetUserGroupsUseCase;
pub use update_user_group::UpdateUserGroupUseCase;
