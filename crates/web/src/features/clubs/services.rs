use sqlx::PgPool;
use storage::{
    dto::club::{ClubDetailResponse, CreateClubRequest, CreateCoachRequest, UpdateClubRequest},
    error::Result,
    models::{Club, Coach},
    repository::club::ClubRepository,
};
use uuid::Uuid;

/// List all clubs
pub async fn list_clubs(pool: &PgPool) -> Result<Vec<Club>> {
    let repo = ClubRepository::new(pool);
    repo.list().await
}

/// Get club by ID
pub async fn get_club(pool: &PgPool, id: Uuid) -> Result<Club> {
    let repo = ClubRepository::new(pool);
    repo.find_by_id(id).await
}

/// Get club with its coaching staff
pub async fn get_club_detailed(pool: &PgPool, id: Uuid) -> Result<ClubDetailResponse> {
    let repo = ClubRepository::new(pool);
    let club = repo.find_by_id(id).await?;
    let coaches = repo.list_coaches(id).await?;

    Ok(ClubDetailResponse::from_parts(club, coaches))
}

/// Create a new club
pub async fn create_club(pool: &PgPool, request: &CreateClubRequest) -> Result<Club> {
    let repo = ClubRepository::new(pool);
    repo.create(request).await
}

/// Rename a club
pub async fn update_club(pool: &PgPool, id: Uuid, request: &UpdateClubRequest) -> Result<Club> {
    let repo = ClubRepository::new(pool);
    repo.update(id, request).await
}

/// Delete a club
pub async fn delete_club(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = ClubRepository::new(pool);
    repo.delete(id).await
}

/// Add a coach to a club
pub async fn add_coach(pool: &PgPool, club_id: Uuid, request: &CreateCoachRequest) -> Result<Coach> {
    let repo = ClubRepository::new(pool);

    // 404 when the club itself is missing, not a foreign-key error.
    repo.find_by_id(club_id).await?;
    repo.add_coach(club_id, request).await
}
