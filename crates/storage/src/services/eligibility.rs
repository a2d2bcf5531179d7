use std::collections::HashSet;

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Athlete;
use crate::repository::athlete::AthleteRepository;
use crate::repository::tournament::TournamentRepository;

/// Reasons a pairing is rejected, in the order the rules are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EligibilityError {
    SameAthlete,
    NotOnRoster,
    GenderMismatch,
    CategoryMismatch,
}

impl std::fmt::Display for EligibilityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Self::SameAthlete => "athletes cannot be the same",
            Self::NotOnRoster => "both athletes must be participants in the selected tournament",
            Self::GenderMismatch => {
                "a male may not fight a female; pairings must be male-male or female-female"
            }
            Self::CategoryMismatch => "athletes must belong to the same weight category",
        };
        f.write_str(reason)
    }
}

impl From<EligibilityError> for StorageError {
    fn from(e: EligibilityError) -> Self {
        StorageError::Validation(e.to_string())
    }
}

/// Pairing rules for a round, evaluated in order; the first failure wins.
///
/// Pure check over already-loaded data, no side effects. The weight-category
/// rule only applies when both athletes have a category assigned.
pub fn check_pairing(
    roster: &HashSet<Uuid>,
    a: &Athlete,
    b: &Athlete,
) -> std::result::Result<(), EligibilityError> {
    if a.athlete_id == b.athlete_id {
        return Err(EligibilityError::SameAthlete);
    }

    if !roster.contains(&a.athlete_id) || !roster.contains(&b.athlete_id) {
        return Err(EligibilityError::NotOnRoster);
    }

    if a.gender != b.gender {
        return Err(EligibilityError::GenderMismatch);
    }

    if let (Some(cat_a), Some(cat_b)) = (a.weight_category_id, b.weight_category_id) {
        if cat_a != cat_b {
            return Err(EligibilityError::CategoryMismatch);
        }
    }

    Ok(())
}

/// Load a tournament's roster and both athletes, then apply the pairing rules.
pub async fn check_eligibility(
    pool: &PgPool,
    tournament_id: Uuid,
    athlete_a_id: Uuid,
    athlete_b_id: Uuid,
) -> Result<()> {
    let tournaments = TournamentRepository::new(pool);
    let athletes = AthleteRepository::new(pool);

    // Fails with NotFound when any referenced id is absent.
    tournaments.find_by_id(tournament_id).await?;
    let a = athletes.find_by_id(athlete_a_id).await?;
    let b = athletes.find_by_id(athlete_b_id).await?;

    let roster: HashSet<Uuid> = tournaments
        .active_roster(tournament_id)
        .await?
        .into_iter()
        .map(|athlete| athlete.athlete_id)
        .collect();

    check_pairing(&roster, &a, &b)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{BeltRank, Gender, KarateStyle};
    use rust_decimal_macros::dec;

    fn athlete(gender: Gender, category: Option<Uuid>) -> Athlete {
        Athlete {
            athlete_id: Uuid::new_v4(),
            first_name: "Jan".to_string(),
            last_name: "Kowalski".to_string(),
            age: 25,
            weight: dec!(70),
            gender,
            belt_rank: BeltRank::Blue,
            style: KarateStyle::Shotokan,
            club_id: Uuid::new_v4(),
            weight_category_id: category,
            placement: None,
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    fn roster_of(athletes: &[&Athlete]) -> HashSet<Uuid> {
        athletes.iter().map(|a| a.athlete_id).collect()
    }

    #[test]
    fn athlete_is_never_eligible_against_itself() {
        let a = athlete(Gender::Male, None);
        let roster = roster_of(&[&a]);

        assert_eq!(
            check_pairing(&roster, &a, &a),
            Err(EligibilityError::SameAthlete)
        );
    }

    #[test]
    fn both_athletes_must_be_on_the_roster() {
        let a = athlete(Gender::Male, None);
        let b = athlete(Gender::Male, None);
        let roster = roster_of(&[&a]);

        assert_eq!(
            check_pairing(&roster, &a, &b),
            Err(EligibilityError::NotOnRoster)
        );
        assert_eq!(
            check_pairing(&roster, &b, &a),
            Err(EligibilityError::NotOnRoster)
        );
    }

    #[test]
    fn gender_mismatch_is_rejected() {
        let a = athlete(Gender::Male, None);
        let b = athlete(Gender::Female, None);
        let roster = roster_of(&[&a, &b]);

        assert_eq!(
            check_pairing(&roster, &a, &b),
            Err(EligibilityError::GenderMismatch)
        );
    }

    #[test]
    fn same_gender_uncategorized_pairing_is_eligible() {
        let a = athlete(Gender::Male, None);
        let b = athlete(Gender::Male, None);
        let roster = roster_of(&[&a, &b]);

        assert_eq!(check_pairing(&roster, &a, &b), Ok(()));

        let c = athlete(Gender::Female, None);
        let d = athlete(Gender::Female, None);
        let roster = roster_of(&[&c, &d]);

        assert_eq!(check_pairing(&roster, &c, &d), Ok(()));
    }

    #[test]
    fn differing_weight_categories_are_rejected() {
        let a = athlete(Gender::Male, Some(Uuid::new_v4()));
        let b = athlete(Gender::Male, Some(Uuid::new_v4()));
        let roster = roster_of(&[&a, &b]);

        assert_eq!(
            check_pairing(&roster, &a, &b),
            Err(EligibilityError::CategoryMismatch)
        );
    }

    #[test]
    fn missing_category_on_either_side_is_not_blocking() {
        let category = Uuid::new_v4();
        let a = athlete(Gender::Male, Some(category));
        let b = athlete(Gender::Male, None);
        let roster = roster_of(&[&a, &b]);

        assert_eq!(check_pairing(&roster, &a, &b), Ok(()));
        assert_eq!(check_pairing(&roster, &b, &a), Ok(()));
    }

    #[test]
    fn matching_categories_are_eligible() {
        let category = Uuid::new_v4();
        let a = athlete(Gender::Female, Some(category));
        let b = athlete(Gender::Female, Some(category));
        let roster = roster_of(&[&a, &b]);

        assert_eq!(check_pairing(&roster, &a, &b), Ok(()));
    }

    #[test]
    fn rejection_reasons_are_reported_verbatim() {
        assert_eq!(
            EligibilityError::SameAthlete.to_string(),
            "athletes cannot be the same"
        );
        assert_eq!(
            EligibilityError::NotOnRoster.to_string(),
            "both athletes must be participants in the selected tournament"
        );
        assert_eq!(
            EligibilityError::GenderMismatch.to_string(),
            "a male may not fight a female; pairings must be male-male or female-female"
        );
        assert_eq!(
            EligibilityError::CategoryMismatch.to_string(),
            "athletes must belong to the same weight category"
        );
    }

    #[test]
    fn rules_are_evaluated_in_order() {
        // Off-roster, mismatched gender and mismatched category: the roster
        // rule is reported because it is checked first.
        let a = athlete(Gender::Male, Some(Uuid::new_v4()));
        let b = athlete(Gender::Female, Some(Uuid::new_v4()));
        let roster = HashSet::new();

        assert_eq!(
            check_pairing(&roster, &a, &b),
            Err(EligibilityError::NotOnRoster)
        );
    }
}
