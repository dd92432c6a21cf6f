pub mod user_groups;

// Re-export use cases
pub use user_groups::{
    CreateUserGroupUseCase, DeleteUserGroupUseCase, GetUserGroupsUseCase, UpdateUserGroupUseCase,
};
