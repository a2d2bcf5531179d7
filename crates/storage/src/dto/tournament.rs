use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::dto::athlete::AthleteResponse;
use crate::dto::category::CategoryResponse;
use crate::dto::round::RoundResponse;
use crate::models::enums::{Gender, TournamentKind};
use crate::models::Tournament;
use crate::services::grouping::CategoryGroup;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TournamentResponse {
    pub tournament_id: Uuid,
    pub name: String,
    pub kind: TournamentKind,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
}

/// Tournament with its rounds and the active roster grouped by gender and
/// weight category (the grouped bracket view).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TournamentDetailResponse {
    pub tournament_id: Uuid,
    pub name: String,
    pub kind: TournamentKind,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub rounds: Vec<RoundResponse>,
    pub active_roster: Vec<AthleteResponse>,
    pub groups: Vec<GenderGroup>,
}

/// Active-roster athletes of one gender, bucketed by weight category.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenderGroup {
    pub gender: Gender,
    pub categories: Vec<CategoryGroupResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryGroupResponse {
    /// Absent for the uncategorized bucket.
    pub category: Option<CategoryResponse>,
    pub athletes: Vec<AthleteResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTournamentRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    pub kind: TournamentKind,

    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTournamentRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub kind: Option<TournamentKind>,

    pub date: Option<NaiveDate>,
}

/// Roster-add payload: each athlete may be assigned a weight category on the
/// way in, mirroring the registration flow.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddAthletesRequest {
    #[validate(length(min = 1, message = "At least one athlete is required"))]
    pub athletes: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RosterEntry {
    pub athlete_id: Uuid,
    pub weight_category_id: Option<Uuid>,
}

impl From<Tournament> for TournamentResponse {
    fn from(tournament: Tournament) -> Self {
        Self {
            tournament_id: tournament.tournament_id,
            name: tournament.name,
            kind: tournament.kind,
            date: tournament.date,
            created_at: tournament.created_at,
        }
    }
}

impl From<CategoryGroup> for CategoryGroupResponse {
    fn from(group: CategoryGroup) -> Self {
        Self {
            category: group.category.map(CategoryResponse::from),
            athletes: group
                .athletes
                .into_iter()
                .map(AthleteResponse::from)
                .collect(),
        }
    }
}
