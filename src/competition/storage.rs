/// SQLite persistence layer for the competition catalogue

use crate::competition::types::Competition;
use anyhow::Result;
use sqlx::sqlite::SqlitePool;

/// Competitions inserted by [`CompetitionStorage::seed_defaults`]
pub const DEFAULT_COMPETITIONS: &[&str] = &[
    "Hult Prize",
    "Startup World Cup",
    "MIT $100K Entrepreneurship Competition",
    "Global Student Entrepreneur Awards (GSEA)",
    "Hello Tomorrow Global Challenge",
    "Slush 100 Pitching Competition",
    "TechCrunch Disrupt Startup Battlefield",
    "MassChallenge",
    "Web Summit PITCH",
    "Startup Grind Global Pitch Competition",
    "IBM Call for Code",
    "Microsoft Imagine Cup (tech-focused)",
    "European Innovation Council (EIC) Accelerator",
    "ClimateLaunchpad (green startups)",
    "XPRIZE Challenges",
    "Chivas Venture",
    "Seedstars World Competition",
    "She Loves Tech Global Competition (female-led)",
    "Youth Entrepreneurship Challenge by JA Worldwide",
    "UN World Tourism Startup Competition",
];

#[derive(Debug, Clone)]
pub struct CompetitionStorage {
    pool: SqlitePool,
}

impl CompetitionStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Initialize the competitions table
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS competitions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                description TEXT,
                advice_prompt TEXT,
                file_generation_prompt TEXT,
                created_at INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_all(&self) -> Result<Vec<Competition>> {
        let competitions = sqlx::query_as::<_, Competition>(
            r#"
            SELECT id, name, description, advice_prompt, file_generation_prompt, created_at
            FROM competitions ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(competitions)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Competition>> {
        let competition = sqlx::query_as::<_, Competition>(
            r#"
            SELECT id, name, description, advice_prompt, file_generation_prompt, created_at
            FROM competitions WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(competition)
    }

    /// Insert every [`DEFAULT_COMPETITIONS`] entry that is not stored yet
    ///
    /// Existing rows (matched by name) are left untouched. Returns how many
    /// were added.
    pub async fn seed_defaults(&self) -> Result<u64> {
        let now = chrono::Utc::now().timestamp();
        let mut tx = self.pool.begin().await?;
        let mut added = 0;

        for name in DEFAULT_COMPETITIONS {
            let result = sqlx::query(
                r#"
                INSERT INTO competitions (name, description, created_at)
                VALUES (?, ?, ?)
                ON CONFLICT(name) DO NOTHING
                "#,
            )
            .bind(*name)
            .bind(format!(
                "Information about {} competition. Prompts and instructions will be added separately.",
                name
            ))
            .bind(now)
            .execute(&mut *tx)
            .await?;
            added += result.rows_affected();
        }

        tx.commit().await?;
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;

    #[tokio::test]
    async fn seeding_is_idempotent() {
        let storage = CompetitionStorage::new(test_pool().await);

        assert_eq!(storage.seed_defaults().await.unwrap(), DEFAULT_COMPETITIONS.len() as u64);
        assert_eq!(storage.seed_defaults().await.unwrap(), 0);

        let names: Vec<String> = storage
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, DEFAULT_COMPETITIONS);
    }

    #[tokio::test]
    async fn seeding_keeps_existing_rows() {
        let pool = test_pool().await;
        sqlx::query(
            "INSERT INTO competitions (name, description, advice_prompt, created_at) VALUES ('Hult Prize', 'custom', 'pitch the impact', 1)",
        )
        .execute(&pool)
        .await
        .unwrap();
        let storage = CompetitionStorage::new(pool);

        let added = storage.seed_defaults().await.unwrap();

        assert_eq!(added, DEFAULT_COMPETITIONS.len() as u64 - 1);
        let hult = storage.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(hult.description.as_deref(), Some("custom"));
        assert_eq!(hult.advice_prompt.as_deref(), Some("pitch the impact"));
    }

    #[tokio::test]
    async fn find_by_id_returns_none_when_absent() {
        let storage = CompetitionStorage::new(test_pool().await);
        assert_eq!(storage.find_by_id(1).await.unwrap(), None);
    }
}
