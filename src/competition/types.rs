use serde::{Deserialize, Serialize};

/// An entrepreneurship competition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Competition {
    pub id: i64,
    /// Unique display name
    pub name: String,
    pub description: Option<String>,
    /// Guidance on how to describe an idea for this competition
    pub advice_prompt: Option<String>,
    /// Instructions for preparing the competition's submission files
    pub file_generation_prompt: Option<String>,
    /// Unix timestamp (seconds)
    pub created_at: i64,
}
