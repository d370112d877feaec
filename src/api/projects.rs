/// Project REST API endpoints
///
/// Store-and-list surface over [`ProjectService`](crate::project::ProjectService).
/// Payloads are not validated: absent fields are stored as null.

use crate::{api::AppState, project::Project};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;

/// Request body for project creation
///
/// Both fields are optional; missing keys become `null` on the stored project.
#[derive(Debug, Default, Deserialize)]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Create project routes
pub fn create_project_routes() -> Router<AppState> {
    Router::new()
        .route("/api/projects", get(list_projects).post(create_project))
        .route("/api/projects/{id}", get(get_project))
}

/// List all projects
///
/// GET /api/projects
/// Returns: [{ "id": 1, "name": "...", "description": "..." }]
async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, StatusCode> {
    match state.projects.list_all().await {
        Ok(projects) => Ok(Json(projects)),
        Err(e) => {
            tracing::error!("Failed to list projects: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Create a new project
///
/// POST /api/projects
/// Body: { "name": "...", "description": "..." }
async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<Json<Project>, StatusCode> {
    match state.projects.create(payload.name, payload.description).await {
        Ok(project) => {
            tracing::info!("📁 Created project {} ({:?})", project.id, project.name);
            Ok(Json(project))
        }
        Err(e) => {
            tracing::error!("Failed to create project: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Get a specific project by ID
///
/// GET /api/projects/{id}
async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Project>, StatusCode> {
    match state.projects.get_by_id(id).await {
        Ok(Some(project)) => Ok(Json(project)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to get project {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{database::test_pool, server::test_app};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn empty_store_lists_empty_array() {
        let app = test_app(test_pool().await);

        let (status, body) = send(&app, get("/api/projects")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn create_then_list_round_trip() {
        let app = test_app(test_pool().await);

        let (status, created) = send(
            &app,
            post_json("/api/projects", json!({ "name": "Acme", "description": "demo" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created, json!({ "id": 1, "name": "Acme", "description": "demo" }));

        let (status, listed) = send(&app, get("/api/projects")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed, json!([{ "id": 1, "name": "Acme", "description": "demo" }]));
    }

    #[tokio::test]
    async fn missing_keys_become_null() {
        let app = test_app(test_pool().await);

        let (status, created) = send(&app, post_json("/api/projects", json!({}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(created, json!({ "id": 1, "name": null, "description": null }));
    }

    #[tokio::test]
    async fn sequential_creates_get_distinct_ids() {
        let app = test_app(test_pool().await);

        let (_, first) = send(&app, post_json("/api/projects", json!({ "name": "a" }))).await;
        let (_, second) = send(&app, post_json("/api/projects", json!({ "name": "b" }))).await;

        assert_ne!(first["id"], second["id"]);
    }

    #[tokio::test]
    async fn get_by_id_returns_project_or_404() {
        let app = test_app(test_pool().await);
        let (_, created) = send(
            &app,
            post_json("/api/projects", json!({ "name": "Acme", "description": "demo" })),
        )
        .await;

        let (status, found) = send(&app, get(&format!("/api/projects/{}", created["id"]))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(found, created);

        let (status, _) = send(&app, get("/api/projects/999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_string_fields_are_rejected() {
        let app = test_app(test_pool().await);

        let (status, _) = send(&app, post_json("/api/projects", json!({ "name": 5 }))).await;

        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn cors_is_open() {
        let app = test_app(test_pool().await);
        let request = Request::get("/api/projects")
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}
