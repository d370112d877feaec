/// Authentication service
///
/// Registers accounts, verifies credentials on login, and issues expiring
/// session tokens. Unknown users and wrong passwords fail the same way.

use crate::{
    auth::{
        password::{hash_password_blocking, verify_password_blocking},
        token::{Token, TokenStorage},
    },
    user::{NewUser, User, UserStorage},
};
use chrono::{Duration, Utc};
use serde::Serialize;

/// Failures reported by [`AuthService`]
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("username already exists")]
    UsernameTaken,
    #[error("invalid registration: {0}")]
    InvalidRegistration(&'static str),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// A successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub token: String,
    pub username: String,
    /// Unix timestamp (seconds)
    pub expires_at: i64,
}

#[derive(Debug, Clone)]
pub struct AuthService {
    users: UserStorage,
    tokens: TokenStorage,
    token_ttl: Duration,
}

impl AuthService {
    pub fn new(users: UserStorage, tokens: TokenStorage, token_ttl: Duration) -> Self {
        Self {
            users,
            tokens,
            token_ttl,
        }
    }

    /// Create an account with a hashed password
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AuthError::InvalidRegistration("username is required"));
        }
        if password.is_empty() {
            return Err(AuthError::InvalidRegistration("password is required"));
        }

        if self.users.find_by_username(username).await?.is_some() {
            return Err(AuthError::UsernameTaken);
        }

        let new_user = NewUser {
            username: username.to_string(),
            password_hash: hash_password_blocking(password.to_string()).await?,
            created_at: Utc::now().timestamp(),
        };

        match self.users.save(new_user).await {
            Ok(user) => {
                tracing::info!("👤 Registered user {} ({})", user.username, user.id);
                Ok(user)
            }
            // Concurrent registration of the same name.
            Err(e) if is_unique_violation(&e) => Err(AuthError::UsernameTaken),
            Err(e) => Err(AuthError::Storage(e)),
        }
    }

    /// Verify credentials and issue a new session token
    ///
    /// An unknown username is verified against a dummy hash so it costs the
    /// same as a wrong password.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let user = self.users.find_by_username(username.trim()).await?;

        let verified = verify_password_blocking(
            password.to_string(),
            user.as_ref().map(|user| user.password_hash.clone()),
        )
        .await?;

        let user = match user {
            Some(user) if verified => user,
            Some(user) => {
                tracing::warn!("Rejected login for {}", user.username);
                return Err(AuthError::InvalidCredentials);
            }
            None => return Err(AuthError::InvalidCredentials),
        };

        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(self.token_ttl)
            .ok_or_else(|| anyhow::anyhow!("Token lifetime {} overflows the clock", self.token_ttl))?;
        let token = Token {
            token: uuid::Uuid::new_v4().to_string(),
            user_id: user.id,
            created_at: now.timestamp(),
            expires_at: expires_at.timestamp(),
        };
        self.tokens.save(&token).await?;

        tracing::debug!("Issued session token for {}", user.username);

        Ok(Session {
            token: token.token,
            username: user.username,
            expires_at: token.expires_at,
        })
    }

    /// Resolve a session token to its user
    ///
    /// Expired tokens are removed and resolve to `None`.
    pub async fn authenticate(&self, token: &str) -> Result<Option<User>, AuthError> {
        let Some(stored) = self.tokens.find_by_token(token).await? else {
            return Ok(None);
        };

        if stored.is_expired(Utc::now().timestamp()) {
            self.tokens.delete_by_token(&stored.token).await?;
            return Ok(None);
        }

        Ok(self.users.find_by_id(stored.user_id).await?)
    }

    /// Revoke a session token; `false` if it was not known
    pub async fn logout(&self, token: &str) -> Result<bool, AuthError> {
        Ok(self.tokens.delete_by_token(token).await?)
    }

    /// Purge expired tokens, returning how many were removed
    pub async fn purge_expired(&self) -> Result<u64, AuthError> {
        Ok(self.tokens.delete_expired(Utc::now().timestamp()).await?)
    }
}

fn is_unique_violation(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<sqlx::Error>(),
        Some(sqlx::Error::Database(db)) if db.is_unique_violation()
    )
}
