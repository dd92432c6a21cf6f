use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Atomic capability assigned to user groups.
///
/// Permissions are managed by another module of the backend; this crate
/// only references them and never creates or mutates one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permission {
    pub id: i64,
    pub name: Arc<str>,
    pub key: Arc<str>,
    pub description: Option<Arc<str>>,
}
