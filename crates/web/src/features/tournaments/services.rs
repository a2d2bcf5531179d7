use sqlx::PgPool;
use storage::{
    dto::tournament::{
        AddAthletesRequest, CreateTournamentRequest, TournamentDetailResponse,
        UpdateTournamentRequest,
    },
    error::Result,
    models::Tournament,
    repository::tournament::TournamentRepository,
    services::tournaments,
};
use uuid::Uuid;

/// List all tournaments
pub async fn list_tournaments(pool: &PgPool) -> Result<Vec<Tournament>> {
    let repo = TournamentRepository::new(pool);
    repo.list().await
}

/// Get tournament by ID
pub async fn get_tournament(pool: &PgPool, id: Uuid) -> Result<Tournament> {
    let repo = TournamentRepository::new(pool);
    repo.find_by_id(id).await
}

/// Get tournament with rounds and grouped active roster
pub async fn get_tournament_detailed(pool: &PgPool, id: Uuid) -> Result<TournamentDetailResponse> {
    tournaments::tournament_detailed(pool, id).await
}

/// Create a new tournament
pub async fn create_tournament(
    pool: &PgPool,
    request: &CreateTournamentRequest,
) -> Result<Tournament> {
    let repo = TournamentRepository::new(pool);
    repo.create(request).await
}

/// Update a tournament
pub async fn update_tournament(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateTournamentRequest,
) -> Result<Tournament> {
    let repo = TournamentRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    repo.update(id, &existing, request).await
}

/// Delete a tournament
pub async fn delete_tournament(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = TournamentRepository::new(pool);
    repo.delete(id).await
}

/// Add athletes to the active roster, assigning categories on the way in
pub async fn add_athletes(pool: &PgPool, id: Uuid, request: &AddAthletesRequest) -> Result<()> {
    tournaments::add_athletes(pool, id, request).await
}

/// Remove an athlete from the active roster
pub async fn remove_athlete(pool: &PgPool, id: Uuid, athlete_id: Uuid) -> Result<()> {
    tournaments::remove_athlete(pool, id, athlete_id).await
}
