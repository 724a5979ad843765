use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Credential record keyed by username. Looked up for existence only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Teacher {
    pub username: String,
    pub display_name: Option<String>,
}
