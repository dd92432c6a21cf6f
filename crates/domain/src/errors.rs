use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User group name is required")]
    NameRequired,

    #[error("A user group named '{0}' already exists")]
    NameAlreadyExists(String),

    #[error("A user group with key '{0}' already exists")]
    KeyAlreadyExists(String),

    #[error("Invalid user group id: {0}")]
    IdInvalid(i64),

    #[error("User group not found: {0}")]
    UserGroupNotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Stable identifier for localized display.
    ///
    /// Clients map these keys to translated messages; the `Display` text on
    /// each variant is for logs only and carries no stability guarantee.
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::NameRequired => "userGroups.validation.nameRequired",
            Self::NameAlreadyExists(_) => "userGroups.validation.nameAlreadyExists",
            Self::KeyAlreadyExists(_) => "userGroups.validation.keyAlreadyExists",
            Self::IdInvalid(_) => "userGroups.validation.idInvalid",
            Self::UserGroupNotFound(_) => "userGroups.validation.notFound",
            Self::DatabaseError(_) => "common.databaseError",
        }
    }
}
