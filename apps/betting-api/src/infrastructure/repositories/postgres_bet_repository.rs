use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::bet::Bet;
use crate::domain::repositories::BetRepository;

/// PostgreSQL implementation of BetRepository
///
/// Enums are stored as their wire names (`HOME_WIN`, `PENDING`, ...).
pub struct PostgresBetRepository {
    pool: PgPool,
}

impl PostgresBetRepository {
    /// Creates a new PostgresBetRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BetRow {
    id: Uuid,
    match_id: Uuid,
    predicted: String,
    match_status: String,
    status: String,
    placed_at: DateTime<Utc>,
    settled_at: Option<DateTime<Utc>>,
}

impl TryFrom<BetRow> for Bet {
    type Error = String;

    fn try_from(r: BetRow) -> Result<Self, Self::Error> {
        Ok(Bet::from_persistence(
            r.id,
            r.match_id,
            r.predicted.parse()?,
            r.match_status.parse()?,
            r.status.parse()?,
            r.placed_at,
            r.settled_at,
        ))
    }
}

#[async_trait]
impl BetRepository for PostgresBetRepository {
    async fn save(&self, bet: &Bet) -> Result<(), String> {
        sqlx::query(
            r#"
            INSERT INTO bets (
                id, match_id, predicted, match_status, status, placed_at, settled_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                match_status = EXCLUDED.match_status,
                status = EXCLUDED.status,
                settled_at = EXCLUDED.settled_at
            "#,
        )
        .bind(bet.id())
        .bind(bet.match_id())
        .bind(bet.predicted().as_str())
        .bind(bet.match_status().as_str())
        .bind(bet.status().as_str())
        .bind(bet.placed_at())
        .bind(bet.settled_at())
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save bet: {}", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Bet>, String> {
        let row = sqlx::query_as::<_, BetRow>(
            r#"
            SELECT id, match_id, predicted, match_status, status, placed_at, settled_at
            FROM bets
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find bet by id: {}", e))?;

        row.map(Bet::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Bet>, String> {
        let rows = sqlx::query_as::<_, BetRow>(
            r#"
            SELECT id, match_id, predicted, match_status, status, placed_at, settled_at
            FROM bets
            ORDER BY placed_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to list bets: {}", e))?;

        rows.into_iter().map(Bet::try_from).collect()
    }
}
