/// Project type definitions
///
/// A project is the only business entity exposed over the REST surface.

use serde::{Deserialize, Serialize};

/// A stored project
///
/// `id` is assigned by the store on insert and never changes afterwards.
/// `name` and `description` are kept exactly as submitted, including absent
/// values, which serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    /// Store-assigned identity
    pub id: i64,
    /// Human-readable project name
    pub name: Option<String>,
    /// Free-form project description
    pub description: Option<String>,
}

/// A project that has not been persisted yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProject {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl NewProject {
    pub fn new(name: Option<String>, description: Option<String>) -> Self {
        Self { name, description }
    }

    /// Attach the identity the store assigned on insert
    pub fn into_project(self, id: i64) -> Project {
        Project {
            id,
            name: self.name,
            description: self.description,
        }
    }
}
