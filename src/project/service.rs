/// Project service
///
/// Direct pass-through to [`ProjectStorage`]; storage failures propagate
/// unchanged to the caller.

use crate::project::{
    storage::ProjectStorage,
    types::{NewProject, Project},
};
use anyhow::Result;

#[derive(Debug, Clone)]
pub struct ProjectService {
    storage: ProjectStorage,
}

impl ProjectService {
    pub fn new(storage: ProjectStorage) -> Self {
        Self { storage }
    }

    /// Every stored project, in store order
    pub async fn list_all(&self) -> Result<Vec<Project>> {
        self.storage.find_all().await
    }

    /// Persist a new project exactly as given
    pub async fn create(
        &self,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Project> {
        self.storage.save(NewProject::new(name, description)).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Project>> {
        self.storage.find_by_id(id).await
    }
}
