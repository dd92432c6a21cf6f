use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::errors::DomainError;
use crate::permission::Permission;

/// Aggregate root: a named set of permissions assigned together.
///
/// `key` is always the canonical form of `name` (see [`crate::key::to_key`])
/// and both are unique across all groups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserGroup {
    pub id: Option<i64>,
    pub name: Arc<str>,
    pub key: Arc<str>,
    pub description: Option<Arc<str>>,
    pub permissions: Vec<Permission>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl UserGroup {
    pub fn new(
        id: Option<i64>,
        name: Arc<str>,
        key: Arc<str>,
        description: Option<Arc<str>>,
        permissions: Vec<Permission>,
    ) -> Self {
        Self {
            id,
            name,
            key,
            description,
            permissions,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::NameRequired);
        }
        Ok(())
    }

    /// Ids of the permissions currently linked to this group, as a set.
    /// Duplicates cannot survive this projection.
    pub fn permission_ids(&self) -> BTreeSet<i64> {
        self.permissions.iter().map(|p| p.id).collect()
    }
}

/// Lightweight projection for list responses; carries no permission detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserGroupSummary {
    pub id: i64,
    pub name: String,
    pub key: String,
    pub description: Option<String>,
}

/// Single-group response: the group's fields plus the ids (only the ids) of
/// its permissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserGroupDetail {
    pub id: i64,
    pub name: String,
    pub key: String,
    pub description: Option<String>,
    pub permissions: Vec<i64>,
}

impl UserGroupDetail {
    pub fn from_group(group: UserGroup) -> Self {
        let permissions = group.permission_ids().into_iter().collect();
        Self {
            id: group.id.unwrap_or(0),
            name: group.name.to_string(),
            key: group.key.to_string(),
            description: group.description.as_ref().map(|s| s.to_string()),
            permissions,
        }
    }
}
