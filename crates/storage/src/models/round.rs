use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Round {
    pub round_id: Uuid,
    pub tournament_id: Uuid,
    pub athlete_a_id: Uuid,
    pub athlete_b_id: Uuid,
    /// Caller-supplied, not auto-sequenced.
    pub round_number: i32,
    pub winner_id: Option<Uuid>,
    pub created_at: chrono::NaiveDateTime,
}
