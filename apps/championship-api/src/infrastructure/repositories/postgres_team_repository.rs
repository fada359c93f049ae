use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;

/// PostgreSQL implementation of TeamRepository
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TeamRow {
    id: Uuid,
    name: String,
    code: String,
    region: String,
    created_at: DateTime<Utc>,
}

impl From<TeamRow> for Team {
    fn from(r: TeamRow) -> Self {
        Team::from_persistence(r.id, r.name, r.code, r.region, r.created_at)
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn save(&self, team: &Team) -> Result<(), String> {
        sqlx::query(
            r#"
            INSERT INTO teams (id, name, code, region, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                code = EXCLUDED.code,
                region = EXCLUDED.region
            "#,
        )
        .bind(team.id())
        .bind(team.name())
        .bind(team.code())
        .bind(team.region())
        .bind(team.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save team: {}", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, String> {
        let row = sqlx::query_as::<_, TeamRow>(
            "SELECT id, name, code, region, created_at FROM teams WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find team by id: {}", e))?;

        Ok(row.map(Team::from))
    }

    async fn find_all(&self) -> Result<Vec<Team>, String> {
        let rows = sqlx::query_as::<_, TeamRow>(
            "SELECT id, name, code, region, created_at FROM teams ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to list teams: {}", e))?;

        Ok(rows.into_iter().map(Team::from).collect())
    }

    async fn find_by_region(&self, region: &str) -> Result<Vec<Team>, String> {
        let rows = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, name, code, region, created_at
            FROM teams
            WHERE region = $1
            ORDER BY created_at
            "#,
        )
        .bind(region)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find teams by region: {}", e))?;

        Ok(rows.into_iter().map(Team::from).collect())
    }
}
