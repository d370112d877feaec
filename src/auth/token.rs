/// Session token persistence
///
/// Tokens are opaque random strings bound to one user with an absolute
/// expiry. Revocation deletes the row.

use anyhow::Result;
use sqlx::sqlite::SqlitePool;

/// An issued session token
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Token {
    pub token: String,
    pub user_id: i64,
    /// Unix timestamp (seconds)
    pub created_at: i64,
    /// Unix timestamp (seconds); the token is invalid from this instant on
    pub expires_at: i64,
}

impl Token {
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at <= now
    }
}

#[derive(Debug, Clone)]
pub struct TokenStorage {
    pool: SqlitePool,
}

impl TokenStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Initialize the tokens table
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS tokens (
                token TEXT PRIMARY KEY,
                user_id INTEGER NOT NULL REFERENCES users(id),
                created_at INTEGER NOT NULL,
                expires_at INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_tokens_user_id ON tokens(user_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn save(&self, token: &Token) -> Result<()> {
        sqlx::query(
            "INSERT INTO tokens (token, user_id, created_at, expires_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&token.token)
        .bind(token.user_id)
        .bind(token.created_at)
        .bind(token.expires_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_token(&self, token: &str) -> Result<Option<Token>> {
        let row = sqlx::query_as::<_, Token>(
            "SELECT token, user_id, created_at, expires_at FROM tokens WHERE token = ?",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Delete a token; returns whether it existed
    pub async fn delete_by_token(&self, token: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tokens WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Drop every token that expired at or before `now`
    pub async fn delete_expired(&self, now: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM tokens WHERE expires_at <= ?")
            .bind(now)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;
    use crate::user::{NewUser, UserStorage};

    async fn storage_with_user() -> (TokenStorage, i64) {
        let pool = test_pool().await;
        let user = UserStorage::new(pool.clone())
            .save(NewUser {
                username: "ada".into(),
                password_hash: "hash".into(),
                created_at: 0,
            })
            .await
            .unwrap();
        (TokenStorage::new(pool), user.id)
    }

    fn token(value: &str, user_id: i64, expires_at: i64) -> Token {
        Token {
            token: value.into(),
            user_id,
            created_at: 0,
            expires_at,
        }
    }

    #[tokio::test]
    async fn saved_token_can_be_found_and_revoked_once() {
        let (storage, user_id) = storage_with_user().await;
        let issued = token("abc", user_id, 100);
        storage.save(&issued).await.unwrap();

        assert_eq!(storage.find_by_token("abc").await.unwrap(), Some(issued));
        assert!(storage.delete_by_token("abc").await.unwrap());
        assert!(!storage.delete_by_token("abc").await.unwrap());
        assert_eq!(storage.find_by_token("abc").await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_expired_keeps_live_tokens() {
        let (storage, user_id) = storage_with_user().await;
        storage.save(&token("old", user_id, 50)).await.unwrap();
        storage.save(&token("new", user_id, 500)).await.unwrap();

        assert_eq!(storage.delete_expired(100).await.unwrap(), 1);
        assert!(storage.find_by_token("old").await.unwrap().is_none());
        assert!(storage.find_by_token("new").await.unwrap().is_some());
    }

    #[test]
    fn expiry_boundary_is_inclusive() {
        let t = token("t", 1, 10);
        assert!(!t.is_expired(9));
        assert!(t.is_expired(10));
    }
}
