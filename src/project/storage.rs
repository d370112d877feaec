/// SQLite persistence layer for projects
///
/// Thin data-access wrapper: every method is one query against the
/// `projects` table.

use crate::project::types::{NewProject, Project};
use anyhow::Result;
use sqlx::sqlite::SqlitePool;

/// SQLite-based project storage
#[derive(Debug, Clone)]
pub struct ProjectStorage {
    /// SQLite connection pool
    pool: SqlitePool,
}

impl ProjectStorage {
    /// Create new storage instance with database connection
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Initialize the projects table
    ///
    /// Safe to call multiple times (uses IF NOT EXISTS).
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS projects (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                description TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// List every stored project, oldest first
    pub async fn find_all(&self) -> Result<Vec<Project>> {
        let projects = sqlx::query_as::<_, Project>(
            "SELECT id, name, description FROM projects ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    /// Retrieve a project by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Project>> {
        let project = sqlx::query_as::<_, Project>(
            "SELECT id, name, description FROM projects WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    /// Insert a new project and return it with its assigned identity
    pub async fn save(&self, project: NewProject) -> Result<Project> {
        let result = sqlx::query("INSERT INTO projects (name, description) VALUES (?, ?)")
            .bind(&project.name)
            .bind(&project.description)
            .execute(&self.pool)
            .await?;

        Ok(project.into_project(result.last_insert_rowid()))
    }
}
