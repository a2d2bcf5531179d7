use sqlx::PgPool;
use storage::{
    dto::round::{EligibilityCheckRequest, EligibilityCheckResponse, SubmitRoundRequest},
    error::{Result, StorageError},
    models::Round,
    repository::round::RoundRepository,
    services::{eligibility, rounds},
};
use uuid::Uuid;

/// List rounds, optionally for one tournament
pub async fn list_rounds(pool: &PgPool, tournament_id: Option<Uuid>) -> Result<Vec<Round>> {
    let repo = RoundRepository::new(pool);
    match tournament_id {
        Some(id) => repo.list_for_tournament(id).await,
        None => repo.list().await,
    }
}

/// Get round by ID
pub async fn get_round(pool: &PgPool, id: Uuid) -> Result<Round> {
    let repo = RoundRepository::new(pool);
    repo.find_by_id(id).await
}

/// Probe a pairing against the eligibility rules without side effects.
///
/// A rejected pairing is a normal 200 outcome carrying the reason; only
/// missing ids surface as errors.
pub async fn check_eligibility(
    pool: &PgPool,
    req: &EligibilityCheckRequest,
) -> Result<EligibilityCheckResponse> {
    match eligibility::check_eligibility(pool, req.tournament_id, req.athlete_a_id, req.athlete_b_id)
        .await
    {
        Ok(()) => Ok(EligibilityCheckResponse {
            eligible: true,
            reason: None,
        }),
        Err(StorageError::Validation(reason)) => Ok(EligibilityCheckResponse {
            eligible: false,
            reason: Some(reason),
        }),
        Err(e) => Err(e),
    }
}

/// Submit and resolve a round
pub async fn submit_round(pool: &PgPool, req: &SubmitRoundRequest) -> Result<Round> {
    rounds::submit_round(pool, req).await
}
