use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::category::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::error::{Result, StorageError};
use crate::models::WeightCategory;

pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all weight categories, lightest first
    pub async fn list(&self) -> Result<Vec<WeightCategory>> {
        let categories = sqlx::query_as::<_, WeightCategory>(
            r#"
            SELECT category_id, name, min_weight, max_weight
            FROM weight_categories
            ORDER BY min_weight, max_weight
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Find weight category by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<WeightCategory> {
        let category = sqlx::query_as::<_, WeightCategory>(
            r#"
            SELECT category_id, name, min_weight, max_weight
            FROM weight_categories
            WHERE category_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(category)
    }

    /// Create a new weight category
    pub async fn create(&self, req: &CreateCategoryRequest) -> Result<WeightCategory> {
        let category = sqlx::query_as::<_, WeightCategory>(
            r#"
            INSERT INTO weight_categories (name, min_weight, max_weight)
            VALUES ($1, $2, $3)
            RETURNING category_id, name, min_weight, max_weight
            "#,
        )
        .bind(&req.name)
        .bind(req.min_weight)
        .bind(req.max_weight)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.code().as_deref() == Some("23505") {
                    return StorageError::ConstraintViolation(
                        "A weight category with this name already exists".to_string(),
                    );
                }
            }
            StorageError::from(e)
        })?;

        Ok(category)
    }

    /// Update an existing weight category
    pub async fn update(
        &self,
        id: Uuid,
        existing: &WeightCategory,
        req: &UpdateCategoryRequest,
    ) -> Result<WeightCategory> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let min_weight = req.min_weight.unwrap_or(existing.min_weight);
        let max_weight = req.max_weight.unwrap_or(existing.max_weight);

        let category = sqlx::query_as::<_, WeightCategory>(
            r#"
            UPDATE weight_categories
            SET name = $2, min_weight = $3, max_weight = $4
            WHERE category_id = $1
            RETURNING category_id, name, min_weight, max_weight
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(min_weight)
        .bind(max_weight)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(category)
    }

    /// Delete a weight category by ID
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM weight_categories WHERE category_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
