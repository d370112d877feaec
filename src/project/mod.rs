/// Project management module
///
/// Entity definition, SQLite storage, and the pass-through service used by
/// the HTTP layer.

pub mod service;
pub mod storage;
pub mod types;

pub use service::ProjectService;
pub use storage::ProjectStorage;
pub use types::{NewProject, Project};
