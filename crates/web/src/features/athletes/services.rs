use sqlx::PgPool;
use storage::{
    dto::athlete::{CreateAthleteRequest, UpdateAthleteRequest},
    error::Result,
    models::Athlete,
    repository::athlete::AthleteRepository,
    services::athletes,
};
use uuid::Uuid;

/// List all athletes
pub async fn list_athletes(pool: &PgPool) -> Result<Vec<Athlete>> {
    let repo = AthleteRepository::new(pool);
    repo.list().await
}

/// Get athlete by ID
pub async fn get_athlete(pool: &PgPool, id: Uuid) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);
    repo.find_by_id(id).await
}

/// Register a new athlete; rejects a weight outside the assigned category
pub async fn create_athlete(pool: &PgPool, request: &CreateAthleteRequest) -> Result<Athlete> {
    athletes::create_athlete(pool, request).await
}

/// Update an athlete; rejects a weight outside the assigned category
pub async fn update_athlete(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateAthleteRequest,
) -> Result<Athlete> {
    athletes::update_athlete(pool, id, request).await
}

/// Delete an athlete
pub async fn delete_athlete(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = AthleteRepository::new(pool);
    repo.delete(id).await
}
