/// Competition catalogue
///
/// Read-only reference data that founders browse when preparing a project.
/// Rows come from the built-in seed list; there is no write API.

pub mod storage;
pub mod types;

pub use storage::{CompetitionStorage, DEFAULT_COMPETITIONS};
pub use types::Competition;
