use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Club, Coach};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClubResponse {
    pub club_id: Uuid,
    pub name: String,
    pub created_at: NaiveDateTime,
}

/// Club with its coaching staff
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClubDetailResponse {
    pub club_id: Uuid,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub coaches: Vec<CoachResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CoachResponse {
    pub coach_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub club_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateClubRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Club name must be between 1 and 100 characters"
    ))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateClubRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCoachRequest {
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
}

impl From<Club> for ClubResponse {
    fn from(club: Club) -> Self {
        Self {
            club_id: club.club_id,
            name: club.name,
            created_at: club.created_at,
        }
    }
}

impl From<Coach> for CoachResponse {
    fn from(coach: Coach) -> Self {
        Self {
            coach_id: coach.coach_id,
            first_name: coach.first_name,
            last_name: coach.last_name,
            club_id: coach.club_id,
        }
    }
}

impl ClubDetailResponse {
    pub fn from_parts(club: Club, coaches: Vec<Coach>) -> Self {
        Self {
            club_id: club.club_id,
            name: club.name,
            created_at: club.created_at,
            coaches: coaches.into_iter().map(CoachResponse::from).collect(),
        }
    }
}
