/// HTTP API Layer
///
/// REST endpoints for the platform:
/// - Project listing, creation and lookup under /api/projects
/// - Account registration and session handling under /api/auth
/// - Read-only competition catalogue under /api/competitions

use crate::{auth::AuthService, competition::CompetitionStorage, project::ProjectService};

// Project endpoints (GET/POST)
pub mod projects;

// Registration, login, logout
pub mod auth;

// Competition catalogue (GET only)
pub mod competitions;

pub use auth::create_auth_routes;
pub use competitions::create_competition_routes;
pub use projects::create_project_routes;

/// Application state shared by every handler
#[derive(Debug, Clone)]
pub struct AppState {
    /// Project pass-through service
    pub projects: ProjectService,
    /// Credential verification and session tokens
    pub auth: AuthService,
    /// Competition catalogue
    pub competitions: CompetitionStorage,
}
