use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Athlete gender. Pairings must match on this exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "gender", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Belt ranks, ordered from lowest to highest grade.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "belt_rank", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BeltRank {
    White,
    Yellow,
    Green,
    Blue,
    Brown,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "karate_style", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum KarateStyle {
    Shotokan,
    GojuRyu,
    ShitoRyu,
    Kyokushin,
    WadoRyu,
    Enshin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "tournament_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TournamentKind {
    Championship,
    Regional,
    Club,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn belt_ranks_order_from_white_to_black() {
        assert!(BeltRank::White < BeltRank::Yellow);
        assert!(BeltRank::Yellow < BeltRank::Green);
        assert!(BeltRank::Green < BeltRank::Blue);
        assert!(BeltRank::Blue < BeltRank::Brown);
        assert!(BeltRank::Brown < BeltRank::Black);
    }

    #[test]
    fn enums_serialize_as_lowercase_strings() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
        assert_eq!(
            serde_json::to_string(&KarateStyle::GojuRyu).unwrap(),
            "\"goju_ryu\""
        );
        assert_eq!(
            serde_json::to_string(&TournamentKind::Championship).unwrap(),
            "\"championship\""
        );
    }
}
