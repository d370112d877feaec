/// Server setup and initialization
///
/// Wires together storage, services, and HTTP routes, and provides the main
/// application factory for creating the Axum app.

use crate::{
    api::{create_auth_routes, create_competition_routes, create_project_routes, AppState},
    auth::{AuthService, TokenStorage},
    competition::CompetitionStorage,
    config::Config,
    database,
    project::{ProjectService, ProjectStorage},
    user::UserStorage,
};
use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the services over an open pool
///
/// Fails if the configured token lifetime is not representable.
pub fn build_state(pool: SqlitePool, config: &Config) -> Result<AppState> {
    let token_ttl = chrono::Duration::try_hours(config.auth.token_ttl_hours).ok_or_else(|| {
        anyhow::anyhow!(
            "Token lifetime of {} hours is out of range",
            config.auth.token_ttl_hours
        )
    })?;

    Ok(AppState {
        projects: ProjectService::new(ProjectStorage::new(pool.clone())),
        auth: AuthService::new(
            UserStorage::new(pool.clone()),
            TokenStorage::new(pool.clone()),
            token_ttl,
        ),
        competitions: CompetitionStorage::new(pool),
    })
}

/// Assemble the router with open CORS and request tracing
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/healthz", get(health_check))
        .merge(create_project_routes())
        .merge(create_auth_routes())
        .merge(create_competition_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Create the main Axum application
///
/// Opens the database, creates the schema, and mounts every route.
pub async fn create_app(config: Config) -> Result<Router> {
    tracing::info!("🗄️ Connecting to database");
    let pool = database::connect(&config.database).await?;

    tracing::info!("📋 Initializing schema");
    database::init_schema(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize database schema: {}", e))?;

    let state = build_state(pool, &config)?;

    if config.database.seed_competitions {
        let added = state
            .competitions
            .seed_defaults()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to seed competitions: {}", e))?;
        tracing::info!("🏆 Competition catalogue seeded ({} new)", added);
    }

    match state.auth.purge_expired().await {
        Ok(0) => {}
        Ok(purged) => tracing::info!("🧹 Purged {} expired session tokens", purged),
        Err(e) => tracing::warn!("Failed to purge expired session tokens: {}", e),
    }

    tracing::info!("📡 Creating HTTP router with all endpoints");
    let app = build_router(state);

    tracing::info!("✅ Application initialized successfully");

    Ok(app)
}

/// Start the HTTP server with the given configuration
pub async fn start_server(config: Config) -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .init();

    tracing::info!("Starting Venture Platform server...");

    let app = create_app(config.clone()).await?;

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server listening on http://{}", bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Venture Platform API" }))
}

async fn health_check() -> &'static str {
    "ok"
}

/// Router over an already-initialized pool, with default configuration
#[cfg(test)]
pub(crate) fn test_app(pool: SqlitePool) -> Router {
    let config = Config {
        server: crate::config::ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
        },
        database: crate::config::DatabaseConfig {
            url: "sqlite::memory:".into(),
            seed_competitions: false,
        },
        auth: crate::config::AuthConfig { token_ttl_hours: 24 },
    };
    build_router(build_state(pool, &config).expect("test state"))
}
