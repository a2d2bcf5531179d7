use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Round;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoundResponse {
    pub round_id: Uuid,
    pub tournament_id: Uuid,
    pub athlete_a_id: Uuid,
    pub athlete_b_id: Uuid,
    pub round_number: i32,
    pub winner_id: Option<Uuid>,
    pub created_at: NaiveDateTime,
}

/// A round proposal: the pairing plus the declared winner. Submitting without
/// a winner is rejected by the resolver, not by request validation, so the
/// caller gets the domain reason back.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitRoundRequest {
    pub tournament_id: Uuid,

    pub athlete_a_id: Uuid,

    pub athlete_b_id: Uuid,

    #[validate(range(min = 1, message = "Round number must be positive"))]
    pub round_number: i32,

    pub winner_id: Option<Uuid>,
}

/// Eligibility-only probe for a pairing; never mutates anything.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EligibilityCheckRequest {
    pub tournament_id: Uuid,
    pub athlete_a_id: Uuid,
    pub athlete_b_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EligibilityCheckResponse {
    pub eligible: bool,
    pub reason: Option<String>,
}

impl From<Round> for RoundResponse {
    fn from(round: Round) -> Self {
        Self {
            round_id: round.round_id,
            tournament_id: round.tournament_id,
            athlete_a_id: round.athlete_a_id,
            athlete_b_id: round.athlete_b_id,
            round_number: round.round_number,
            winner_id: round.winner_id,
            created_at: round.created_at,
        }
    }
}
