/// Venture Platform: project and account backend
///
/// Stores and lists projects over REST, serves a read-only competition
/// catalogue, and manages user accounts with verified logins and expiring
/// session tokens.

// Core configuration and setup
pub mod config;

// SQLite pool and schema bootstrap
pub mod database;

// Project entity, storage, and pass-through service
pub mod project;

// User accounts
pub mod user;

// Read-only competition catalogue
pub mod competition;

// Password hashing, session tokens, and the authentication service
pub mod auth;

// HTTP API layer - REST endpoints for projects and authentication
pub mod api;

// Server setup and initialization
pub mod server;

// Re-export commonly used types for external consumers
pub use auth::{AuthError, AuthService, Session};
pub use competition::Competition;
pub use project::{Project, ProjectService};
pub use server::start_server;
pub use user::User;
