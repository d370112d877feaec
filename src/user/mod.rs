/// User accounts
///
/// Users only exist to own credentials; no project references them.

pub mod storage;
pub mod types;

pub use storage::UserStorage;
pub use types::{NewUser, User};
