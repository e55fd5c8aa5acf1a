use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A selectable tag. Read-only reference data; there is no skill-editing flow.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillRow {
    pub id: Uuid,
    pub name: String,
}
