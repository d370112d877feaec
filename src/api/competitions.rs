/// Competition catalogue REST API endpoints
///
/// Read-only: the catalogue is filled by startup seeding.

use crate::{api::AppState, competition::Competition};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

pub fn create_competition_routes() -> Router<AppState> {
    Router::new()
        .route("/api/competitions", get(list_competitions))
        .route("/api/competitions/{id}", get(get_competition))
}

/// GET /api/competitions
async fn list_competitions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Competition>>, StatusCode> {
    match state.competitions.find_all().await {
        Ok(competitions) => Ok(Json(competitions)),
        Err(e) => {
            tracing::error!("Failed to list competitions: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/competitions/{id}
async fn get_competition(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Competition>, StatusCode> {
    match state.competitions.find_by_id(id).await {
        Ok(Some(competition)) => Ok(Json(competition)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to get competition {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
