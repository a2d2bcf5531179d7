use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::tournament::{CreateTournamentRequest, UpdateTournamentRequest};
use crate::error::{Result, StorageError};
use crate::models::{Athlete, Tournament};

pub struct TournamentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TournamentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all tournaments, most recent first
    pub async fn list(&self) -> Result<Vec<Tournament>> {
        let tournaments = sqlx::query_as::<_, Tournament>(
            r#"
            SELECT tournament_id, name, kind, date, created_at
            FROM tournaments
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(tournaments)
    }

    /// Find tournament by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Tournament> {
        let tournament = sqlx::query_as::<_, Tournament>(
            r#"
            SELECT tournament_id, name, kind, date, created_at
            FROM tournaments
            WHERE tournament_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(tournament)
    }

    /// Create a new tournament
    pub async fn create(&self, req: &CreateTournamentRequest) -> Result<Tournament> {
        let tournament = sqlx::query_as::<_, Tournament>(
            r#"
            INSERT INTO tournaments (name, kind, date)
            VALUES ($1, $2, $3)
            RETURNING tournament_id, name, kind, date, created_at
            "#,
        )
        .bind(&req.name)
        .bind(req.kind)
        .bind(req.date)
        .fetch_one(self.pool)
        .await?;

        Ok(tournament)
    }

    /// Update an existing tournament
    pub async fn update(
        &self,
        id: Uuid,
        existing: &Tournament,
        req: &UpdateTournamentRequest,
    ) -> Result<Tournament> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let kind = req.kind.unwrap_or(existing.kind);
        let date = req.date.unwrap_or(existing.date);

        let tournament = sqlx::query_as::<_, Tournament>(
            r#"
            UPDATE tournaments
            SET name = $2, kind = $3, date = $4
            WHERE tournament_id = $1
            RETURNING tournament_id, name, kind, date, created_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(kind)
        .bind(date)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(tournament)
    }

    /// Delete a tournament by ID
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM tournaments WHERE tournament_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Athletes still competing in the tournament
    pub async fn active_roster(&self, tournament_id: Uuid) -> Result<Vec<Athlete>> {
        let athletes = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT a.athlete_id, a.first_name, a.last_name, a.age, a.weight, a.gender,
                   a.belt_rank, a.style, a.club_id, a.weight_category_id, a.placement,
                   a.created_at
            FROM athletes a
            JOIN tournament_athletes ta ON ta.athlete_id = a.athlete_id
            WHERE ta.tournament_id = $1
            ORDER BY a.last_name, a.first_name
            "#,
        )
        .bind(tournament_id)
        .fetch_all(self.pool)
        .await?;

        Ok(athletes)
    }

    /// Add an athlete to the tournament's active roster
    pub async fn add_to_roster(&self, tournament_id: Uuid, athlete_id: Uuid) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO tournament_athletes (tournament_id, athlete_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(tournament_id)
        .bind(athlete_id)
        .execute(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.code().as_deref() == Some("23503") {
                    return StorageError::ConstraintViolation(
                        "Referenced tournament or athlete does not exist".to_string(),
                    );
                }
            }
            StorageError::from(e)
        })?;

        Ok(())
    }

    /// Remove an athlete from the tournament's active roster
    pub async fn remove_from_roster(&self, tournament_id: Uuid, athlete_id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "DELETE FROM tournament_athletes WHERE tournament_id = $1 AND athlete_id = $2",
        )
        .bind(tournament_id)
        .bind(athlete_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
