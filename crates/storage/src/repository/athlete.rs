use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::athlete::{CreateAthleteRequest, UpdateAthleteRequest};
use crate::error::{Result, StorageError};
use crate::models::Athlete;

const ATHLETE_COLUMNS: &str = "athlete_id, first_name, last_name, age, weight, gender, \
     belt_rank, style, club_id, weight_category_id, placement, created_at";

pub struct AthleteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all athletes
    pub async fn list(&self) -> Result<Vec<Athlete>> {
        let athletes = sqlx::query_as::<_, Athlete>(&format!(
            "SELECT {ATHLETE_COLUMNS} FROM athletes ORDER BY last_name, first_name"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(athletes)
    }

    /// Find athlete by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            "SELECT {ATHLETE_COLUMNS} FROM athletes WHERE athlete_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Create a new athlete
    pub async fn create(&self, req: &CreateAthleteRequest) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            r#"
            INSERT INTO athletes (first_name, last_name, age, weight, gender,
                                  belt_rank, style, club_id, weight_category_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {ATHLETE_COLUMNS}
            "#
        ))
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(req.age)
        .bind(req.weight)
        .bind(req.gender)
        .bind(req.belt_rank)
        .bind(req.style)
        .bind(req.club_id)
        .bind(req.weight_category_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.code().as_deref() == Some("23503") {
                    return StorageError::ConstraintViolation(
                        "Referenced club or weight category does not exist".to_string(),
                    );
                }
            }
            StorageError::from(e)
        })?;

        Ok(athlete)
    }

    /// Update an existing athlete
    pub async fn update(
        &self,
        id: Uuid,
        existing: &Athlete,
        req: &UpdateAthleteRequest,
    ) -> Result<Athlete> {
        let first_name = req.first_name.as_ref().unwrap_or(&existing.first_name);
        let last_name = req.last_name.as_ref().unwrap_or(&existing.last_name);
        let age = req.age.unwrap_or(existing.age);
        let weight = req.weight.unwrap_or(existing.weight);
        let gender = req.gender.unwrap_or(existing.gender);
        let belt_rank = req.belt_rank.unwrap_or(existing.belt_rank);
        let style = req.style.unwrap_or(existing.style);
        let club_id = req.club_id.unwrap_or(existing.club_id);
        let weight_category_id = req.weight_category_id.or(existing.weight_category_id);

        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            r#"
            UPDATE athletes
            SET first_name = $2,
                last_name = $3,
                age = $4,
                weight = $5,
                gender = $6,
                belt_rank = $7,
                style = $8,
                club_id = $9,
                weight_category_id = $10
            WHERE athlete_id = $1
            RETURNING {ATHLETE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(first_name)
        .bind(last_name)
        .bind(age)
        .bind(weight)
        .bind(gender)
        .bind(belt_rank)
        .bind(style)
        .bind(club_id)
        .bind(weight_category_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Assign a weight category to an athlete
    pub async fn assign_category(&self, id: Uuid, category_id: Uuid) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            r#"
            UPDATE athletes
            SET weight_category_id = $2
            WHERE athlete_id = $1
            RETURNING {ATHLETE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(category_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Delete an athlete by ID
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM athletes WHERE athlete_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
