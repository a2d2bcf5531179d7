use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Round;

pub struct RoundRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RoundRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all rounds, newest first
    pub async fn list(&self) -> Result<Vec<Round>> {
        let rounds = sqlx::query_as::<_, Round>(
            r#"
            SELECT round_id, tournament_id, athlete_a_id, athlete_b_id,
                   round_number, winner_id, created_at
            FROM rounds
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rounds)
    }

    /// List rounds of one tournament in round-number order
    pub async fn list_for_tournament(&self, tournament_id: Uuid) -> Result<Vec<Round>> {
        let rounds = sqlx::query_as::<_, Round>(
            r#"
            SELECT round_id, tournament_id, athlete_a_id, athlete_b_id,
                   round_number, winner_id, created_at
            FROM rounds
            WHERE tournament_id = $1
            ORDER BY round_number, created_at
            "#,
        )
        .bind(tournament_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rounds)
    }

    /// Find round by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Round> {
        let round = sqlx::query_as::<_, Round>(
            r#"
            SELECT round_id, tournament_id, athlete_a_id, athlete_b_id,
                   round_number, winner_id, created_at
            FROM rounds
            WHERE round_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(round)
    }
}
