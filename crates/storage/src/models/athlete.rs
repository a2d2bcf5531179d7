use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::enums::{BeltRank, Gender, KarateStyle};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub athlete_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    /// Bodyweight in kilograms.
    pub weight: Decimal,
    pub gender: Gender,
    pub belt_rank: BeltRank,
    pub style: KarateStyle,
    pub club_id: Uuid,
    pub weight_category_id: Option<Uuid>,
    /// Final rank in the most recent tournament, assigned at elimination.
    pub placement: Option<i32>,
    pub created_at: chrono::NaiveDateTime,
}
