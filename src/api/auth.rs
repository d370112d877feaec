/// Account and session REST API endpoints
///
/// Login verifies credentials; session tokens are presented back as
/// `Authorization: Bearer <token>`.

use crate::{
    api::AppState,
    auth::{AuthError, Session},
    user::User,
};
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

/// Request body for login and registration
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Response for a newly registered account
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: i64,
    pub username: String,
    pub created_at: i64,
}

/// Create authentication routes
pub fn create_auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/me", get(me))
}

/// POST /api/auth/register
/// Body: { "username": "...", "password": "..." }
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<Json<RegisterResponse>, StatusCode> {
    let user = state
        .auth
        .register(&payload.username, &payload.password)
        .await
        .map_err(status_for)?;

    Ok(Json(RegisterResponse {
        id: user.id,
        username: user.username,
        created_at: user.created_at,
    }))
}

/// POST /api/auth/login
/// Returns: { "token": "...", "username": "...", "expires_at": 1700000000 }
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<Json<Session>, StatusCode> {
    state
        .auth
        .login(&payload.username, &payload.password)
        .await
        .map(Json)
        .map_err(status_for)
}

/// POST /api/auth/logout
async fn logout(State(state): State<AppState>, headers: HeaderMap) -> StatusCode {
    let Some(token) = bearer_token(&headers) else {
        return StatusCode::UNAUTHORIZED;
    };

    match state.auth.logout(token).await {
        Ok(true) => StatusCode::NO_CONTENT,
        Ok(false) => StatusCode::UNAUTHORIZED,
        Err(e) => status_for(e),
    }
}

/// GET /api/auth/me
async fn me(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<User>, StatusCode> {
    let token = bearer_token(&headers).ok_or(StatusCode::UNAUTHORIZED)?;

    match state.auth.authenticate(token).await {
        Ok(Some(user)) => Ok(Json(user)),
        Ok(None) => Err(StatusCode::UNAUTHORIZED),
        Err(e) => Err(status_for(e)),
    }
}

/// Extract the token from an `Authorization: Bearer` header
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn status_for(err: AuthError) -> StatusCode {
    match err {
        AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AuthError::UsernameTaken | AuthError::InvalidRegistration(_) => StatusCode::BAD_REQUEST,
        AuthError::Storage(e) => {
            tracing::error!("Authentication storage failure: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
