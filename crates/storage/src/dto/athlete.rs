use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::enums::{BeltRank, Gender, KarateStyle};

/// Response containing basic athlete information
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub athlete_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub weight: Decimal,
    pub gender: Gender,
    pub belt_rank: BeltRank,
    pub style: KarateStyle,
    pub club_id: Uuid,
    pub weight_category_id: Option<Uuid>,
    pub placement: Option<i32>,
    pub created_at: NaiveDateTime,
}

/// Request payload for registering a new athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "First name must be between 1 and 50 characters"
    ))]
    pub first_name: String,

    #[validate(length(
        min = 1,
        max = 50,
        message = "Last name must be between 1 and 50 characters"
    ))]
    pub last_name: String,

    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120"))]
    pub age: i32,

    #[validate(custom(function = "validate_weight"))]
    pub weight: Decimal,

    pub gender: Gender,

    pub belt_rank: BeltRank,

    pub style: KarateStyle,

    pub club_id: Uuid,

    pub weight_category_id: Option<Uuid>,
}

/// Request payload for updating an existing athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAthleteRequest {
    #[validate(length(min = 1, max = 50))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub last_name: Option<String>,

    #[validate(range(min = 1, max = 120))]
    pub age: Option<i32>,

    #[validate(custom(function = "validate_optional_weight"))]
    pub weight: Option<Decimal>,

    pub gender: Option<Gender>,

    pub belt_rank: Option<BeltRank>,

    pub style: Option<KarateStyle>,

    pub club_id: Option<Uuid>,

    pub weight_category_id: Option<Uuid>,
}

fn validate_weight(weight: &Decimal) -> Result<(), validator::ValidationError> {
    if weight.is_sign_positive() && !weight.is_zero() {
        Ok(())
    } else {
        Err(validator::ValidationError::new("weight_not_positive"))
    }
}

fn validate_optional_weight(weight: &Decimal) -> Result<(), validator::ValidationError> {
    validate_weight(weight)
}

impl From<crate::models::Athlete> for AthleteResponse {
    fn from(athlete: crate::models::Athlete) -> Self {
        Self {
            athlete_id: athlete.athlete_id,
            first_name: athlete.first_name,
            last_name: athlete.last_name,
            age: athlete.age,
            weight: athlete.weight,
            gender: athlete.gender,
            belt_rank: athlete.belt_rank,
            style: athlete.style,
            club_id: athlete.club_id,
            weight_category_id: athlete.weight_category_id,
            placement: athlete.placement,
            created_at: athlete.created_at,
        }
    }
}
