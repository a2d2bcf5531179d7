use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::athlete::AthleteResponse;
use crate::dto::round::RoundResponse;
use crate::dto::tournament::{
    AddAthletesRequest, CategoryGroupResponse, GenderGroup, TournamentDetailResponse,
};
use crate::error::{Result, StorageError};
use crate::models::enums::Gender;
use crate::models::Athlete;
use crate::repository::athlete::AthleteRepository;
use crate::repository::category::CategoryRepository;
use crate::repository::round::RoundRepository;
use crate::repository::tournament::TournamentRepository;
use crate::services::athletes::check_category_consistency;
use crate::services::grouping::group_by_category;

/// Tournament with rounds and the active roster grouped by gender and weight
/// category.
pub async fn tournament_detailed(pool: &PgPool, id: Uuid) -> Result<TournamentDetailResponse> {
    let tournaments = TournamentRepository::new(pool);
    let tournament = tournaments.find_by_id(id).await?;

    let rounds = RoundRepository::new(pool).list_for_tournament(id).await?;
    let roster = tournaments.active_roster(id).await?;
    let categories = CategoryRepository::new(pool).list().await?;

    let mut groups = Vec::new();
    for gender in [Gender::Male, Gender::Female, Gender::Other] {
        let of_gender: Vec<Athlete> = roster
            .iter()
            .filter(|a| a.gender == gender)
            .cloned()
            .collect();

        if of_gender.is_empty() {
            continue;
        }

        groups.push(GenderGroup {
            gender,
            categories: group_by_category(&of_gender, &categories)
                .into_iter()
                .map(CategoryGroupResponse::from)
                .collect(),
        });
    }

    Ok(TournamentDetailResponse {
        tournament_id: tournament.tournament_id,
        name: tournament.name,
        kind: tournament.kind,
        date: tournament.date,
        created_at: tournament.created_at,
        rounds: rounds.into_iter().map(RoundResponse::from).collect(),
        active_roster: roster.into_iter().map(AthleteResponse::from).collect(),
        groups,
    })
}

/// Register athletes on a tournament's active roster, optionally assigning
/// each a weight category first (validated against the athlete's weight).
pub async fn add_athletes(pool: &PgPool, tournament_id: Uuid, req: &AddAthletesRequest) -> Result<()> {
    let tournaments = TournamentRepository::new(pool);
    let athletes = AthleteRepository::new(pool);
    let categories = CategoryRepository::new(pool);

    tournaments.find_by_id(tournament_id).await?;

    for entry in &req.athletes {
        let athlete = athletes.find_by_id(entry.athlete_id).await?;

        if let Some(category_id) = entry.weight_category_id {
            let category = categories.find_by_id(category_id).await?;
            check_category_consistency(athlete.weight, Some(&category))
                .map_err(StorageError::Validation)?;
            athletes.assign_category(entry.athlete_id, category_id).await?;
        }

        tournaments.add_to_roster(tournament_id, entry.athlete_id).await?;
    }

    Ok(())
}

/// Withdraw an athlete from a tournament's active roster.
pub async fn remove_athlete(pool: &PgPool, tournament_id: Uuid, athlete_id: Uuid) -> Result<()> {
    let tournaments = TournamentRepository::new(pool);
    tournaments.find_by_id(tournament_id).await?;
    tournaments.remove_from_roster(tournament_id, athlete_id).await
}
