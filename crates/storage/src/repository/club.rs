use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::club::{CreateClubRequest, CreateCoachRequest, UpdateClubRequest};
use crate::error::{Result, StorageError};
use crate::models::{Club, Coach};

pub struct ClubRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ClubRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all clubs
    pub async fn list(&self) -> Result<Vec<Club>> {
        let clubs = sqlx::query_as::<_, Club>(
            r#"
            SELECT club_id, name, created_at
            FROM clubs
            ORDER BY name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(clubs)
    }

    /// Find club by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Club> {
        let club = sqlx::query_as::<_, Club>(
            r#"
            SELECT club_id, name, created_at
            FROM clubs
            WHERE club_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(club)
    }

    /// Create a new club
    pub async fn create(&self, req: &CreateClubRequest) -> Result<Club> {
        let club = sqlx::query_as::<_, Club>(
            r#"
            INSERT INTO clubs (name)
            VALUES ($1)
            RETURNING club_id, name, created_at
            "#,
        )
        .bind(&req.name)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.code().as_deref() == Some("23505") {
                    return StorageError::ConstraintViolation(
                        "A club with this name already exists".to_string(),
                    );
                }
            }
            StorageError::from(e)
        })?;

        Ok(club)
    }

    /// Rename an existing club
    pub async fn update(&self, id: Uuid, req: &UpdateClubRequest) -> Result<Club> {
        let club = sqlx::query_as::<_, Club>(
            r#"
            UPDATE clubs
            SET name = $2
            WHERE club_id = $1
            RETURNING club_id, name, created_at
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(club)
    }

    /// Delete a club by ID
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM clubs WHERE club_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// List coaches attached to a club
    pub async fn list_coaches(&self, club_id: Uuid) -> Result<Vec<Coach>> {
        let coaches = sqlx::query_as::<_, Coach>(
            r#"
            SELECT coach_id, first_name, last_name, club_id
            FROM coaches
            WHERE club_id = $1
            ORDER BY last_name, first_name
            "#,
        )
        .bind(club_id)
        .fetch_all(self.pool)
        .await?;

        Ok(coaches)
    }

    /// Add a coach to a club
    pub async fn add_coach(&self, club_id: Uuid, req: &CreateCoachRequest) -> Result<Coach> {
        let coach = sqlx::query_as::<_, Coach>(
            r#"
            INSERT INTO coaches (first_name, last_name, club_id)
            VALUES ($1, $2, $3)
            RETURNING coach_id, first_name, last_name, club_id
            "#,
        )
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(club_id)
        .fetch_one(self.pool)
        .await?;

        Ok(coach)
    }
}
