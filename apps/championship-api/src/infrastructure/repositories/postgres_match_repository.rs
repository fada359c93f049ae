use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::matches::{Match, MatchStatus};
use crate::domain::repositories::MatchRepository;

/// PostgreSQL implementation of MatchRepository
///
/// Status is stored as its wire name (`SCHEDULED` / `PLAYED`).
pub struct PostgresMatchRepository {
    pool: PgPool,
}

impl PostgresMatchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MatchRow {
    id: Uuid,
    home_team_id: Uuid,
    away_team_id: Uuid,
    home_score: Option<i32>,
    away_score: Option<i32>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<MatchRow> for Match {
    type Error = String;

    fn try_from(r: MatchRow) -> Result<Self, Self::Error> {
        let status: MatchStatus = r.status.parse()?;
        Ok(Match::from_persistence(
            r.id,
            r.home_team_id,
            r.away_team_id,
            r.home_score,
            r.away_score,
            status,
            r.created_at,
            r.updated_at,
        ))
    }
}

const SELECT_MATCH: &str = r#"
    SELECT id, home_team_id, away_team_id, home_score, away_score,
           status, created_at, updated_at
    FROM matches
"#;

#[async_trait]
impl MatchRepository for PostgresMatchRepository {
    async fn save(&self, game: &Match) -> Result<(), String> {
        sqlx::query(
            r#"
            INSERT INTO matches (
                id, home_team_id, away_team_id, home_score, away_score,
                status, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                home_score = EXCLUDED.home_score,
                away_score = EXCLUDED.away_score,
                status = EXCLUDED.status,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(game.id())
        .bind(game.home_team_id())
        .bind(game.away_team_id())
        .bind(game.home_score())
        .bind(game.away_score())
        .bind(game.status().as_str())
        .bind(game.created_at())
        .bind(game.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save match: {}", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Match>, String> {
        let row = sqlx::query_as::<_, MatchRow>(&format!("{} WHERE id = $1", SELECT_MATCH))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| format!("Failed to find match by id: {}", e))?;

        row.map(Match::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Match>, String> {
        let rows = sqlx::query_as::<_, MatchRow>(&format!("{} ORDER BY created_at", SELECT_MATCH))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| format!("Failed to list matches: {}", e))?;

        rows.into_iter().map(Match::try_from).collect()
    }
}
