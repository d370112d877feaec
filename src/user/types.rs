use serde::Serialize;

/// A registered account
///
/// The password hash never leaves the process: it is skipped on
/// serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Unix timestamp (seconds)
    pub created_at: i64,
}

/// Account data ready to be inserted
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub created_at: i64,
}
