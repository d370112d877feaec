/// Authentication layer
///
/// Password hashing, session tokens, and the service that ties them to user
/// accounts.

pub mod password;
pub mod service;
pub mod token;

pub use service::{AuthError, AuthService, Session};
pub use token::{Token, TokenStorage};
