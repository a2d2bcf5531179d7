use sqlx::PgPool;
use storage::{
    dto::category::{CreateCategoryRequest, UpdateCategoryRequest},
    error::Result,
    models::WeightCategory,
    repository::category::CategoryRepository,
    services::categories,
};
use uuid::Uuid;

/// List all weight categories
pub async fn list_categories(pool: &PgPool) -> Result<Vec<WeightCategory>> {
    let repo = CategoryRepository::new(pool);
    repo.list().await
}

/// Get weight category by ID
pub async fn get_category(pool: &PgPool, id: Uuid) -> Result<WeightCategory> {
    let repo = CategoryRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new weight category
pub async fn create_category(
    pool: &PgPool,
    request: &CreateCategoryRequest,
) -> Result<WeightCategory> {
    let repo = CategoryRepository::new(pool);
    repo.create(request).await
}

/// Update a weight category; rejects merged bounds that end up inverted
pub async fn update_category(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateCategoryRequest,
) -> Result<WeightCategory> {
    categories::update_category(pool, id, request).await
}

/// Delete a weight category
pub async fn delete_category(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = CategoryRepository::new(pool);
    repo.delete(id).await
}
