use std::collections::HashSet;

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::round::SubmitRoundRequest;
use crate::error::{Result, StorageError};
use crate::models::Round;
use crate::repository::athlete::AthleteRepository;
use crate::repository::tournament::TournamentRepository;
use crate::services::eligibility;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundError {
    MissingWinner,
    InvalidWinner,
}

impl std::fmt::Display for RoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Self::MissingWinner => "a winner must be selected",
            Self::InvalidWinner => "winner must be either athlete A or athlete B",
        };
        f.write_str(reason)
    }
}

impl From<RoundError> for StorageError {
    fn from(e: RoundError) -> Self {
        StorageError::Validation(e.to_string())
    }
}

/// Split a declared winner into (winner, loser).
///
/// A round submitted without a winner is a hard validation failure; a winner
/// outside the pairing is rejected before any mutation.
pub fn winner_and_loser(
    athlete_a_id: Uuid,
    athlete_b_id: Uuid,
    winner_id: Option<Uuid>,
) -> std::result::Result<(Uuid, Uuid), RoundError> {
    let winner_id = winner_id.ok_or(RoundError::MissingWinner)?;

    if winner_id == athlete_a_id {
        Ok((athlete_a_id, athlete_b_id))
    } else if winner_id == athlete_b_id {
        Ok((athlete_b_id, athlete_a_id))
    } else {
        Err(RoundError::InvalidWinner)
    }
}

/// Placement assigned to an eliminated athlete: everyone still on the roster
/// finishes ahead of them.
pub fn placement_after_removal(remaining: i64) -> i32 {
    remaining as i32 + 1
}

/// Validate and resolve one round: record the winner, remove the loser from
/// the tournament's active roster and assign the loser's final placement.
///
/// The round insert, roster removal and placement write happen inside one
/// transaction, so a resolution is applied entirely or not at all. Because
/// eligibility requires both athletes to still be on the active roster, a
/// round involving an already-eliminated athlete is rejected instead of
/// double-counting a placement.
pub async fn submit_round(pool: &PgPool, req: &SubmitRoundRequest) -> Result<Round> {
    let tournaments = TournamentRepository::new(pool);
    let athletes = AthleteRepository::new(pool);

    tournaments.find_by_id(req.tournament_id).await?;
    let a = athletes.find_by_id(req.athlete_a_id).await?;
    let b = athletes.find_by_id(req.athlete_b_id).await?;

    let roster: HashSet<Uuid> = tournaments
        .active_roster(req.tournament_id)
        .await?
        .into_iter()
        .map(|athlete| athlete.athlete_id)
        .collect();

    eligibility::check_pairing(&roster, &a, &b)?;

    let (winner_id, loser_id) = winner_and_loser(a.athlete_id, b.athlete_id, req.winner_id)?;

    let mut tx = pool.begin().await?;

    let round = sqlx::query_as::<_, Round>(
        r#"
        INSERT INTO rounds (tournament_id, athlete_a_id, athlete_b_id, round_number, winner_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING round_id, tournament_id, athlete_a_id, athlete_b_id,
                  round_number, winner_id, created_at
        "#,
    )
    .bind(req.tournament_id)
    .bind(a.athlete_id)
    .bind(b.athlete_id)
    .bind(req.round_number)
    .bind(winner_id)
    .fetch_one(&mut *tx)
    .await?;

    let removed = sqlx::query(
        "DELETE FROM tournament_athletes WHERE tournament_id = $1 AND athlete_id = $2",
    )
    .bind(req.tournament_id)
    .bind(loser_id)
    .execute(&mut *tx)
    .await?;

    // A concurrent resolution may have eliminated the loser between the
    // eligibility check and this delete; reject rather than place twice.
    if removed.rows_affected() == 0 {
        return Err(eligibility::EligibilityError::NotOnRoster.into());
    }

    let remaining =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tournament_athletes WHERE tournament_id = $1")
            .bind(req.tournament_id)
            .fetch_one(&mut *tx)
            .await?;

    sqlx::query("UPDATE athletes SET placement = $2 WHERE athlete_id = $1")
        .bind(loser_id)
        .bind(placement_after_removal(remaining))
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::debug!(
        round_id = %round.round_id,
        winner_id = %winner_id,
        loser_id = %loser_id,
        placement = placement_after_removal(remaining),
        "round resolved"
    );

    Ok(round)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_winner_is_a_hard_failure() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        assert_eq!(winner_and_loser(a, b, None), Err(RoundError::MissingWinner));
        assert_eq!(
            RoundError::MissingWinner.to_string(),
            "a winner must be selected"
        );
    }

    #[test]
    fn winner_outside_the_pairing_is_rejected() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let outsider = Uuid::new_v4();

        assert_eq!(
            winner_and_loser(a, b, Some(outsider)),
            Err(RoundError::InvalidWinner)
        );
        assert_eq!(
            RoundError::InvalidWinner.to_string(),
            "winner must be either athlete A or athlete B"
        );
    }

    #[test]
    fn loser_is_the_other_athlete() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        assert_eq!(winner_and_loser(a, b, Some(a)), Ok((a, b)));
        assert_eq!(winner_and_loser(a, b, Some(b)), Ok((b, a)));
    }

    #[test]
    fn placement_is_remaining_roster_plus_one() {
        // Two athletes before resolution: one remains, loser takes 2nd place.
        assert_eq!(placement_after_removal(1), 2);
        // Larger field: seven still competing, the eliminated athlete is 8th.
        assert_eq!(placement_after_removal(7), 8);
    }
}
