use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WeightCategory {
    pub category_id: Uuid,
    pub name: String,
    /// Inclusive bounds in kilograms.
    pub min_weight: Decimal,
    pub max_weight: Decimal,
}

impl WeightCategory {
    /// Whether a bodyweight falls inside the category's inclusive bounds.
    pub fn contains(&self, weight: Decimal) -> bool {
        self.min_weight <= weight && weight <= self.max_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn category(min: Decimal, max: Decimal) -> WeightCategory {
        WeightCategory {
            category_id: Uuid::new_v4(),
            name: "-70kg".to_string(),
            min_weight: min,
            max_weight: max,
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let cat = category(dec!(60), dec!(70));
        assert!(cat.contains(dec!(60)));
        assert!(cat.contains(dec!(65.5)));
        assert!(cat.contains(dec!(70)));
    }

    #[test]
    fn out_of_bounds_weight_is_rejected() {
        let cat = category(dec!(60), dec!(70));
        assert!(!cat.contains(dec!(59.99)));
        assert!(!cat.contains(dec!(75)));
    }
}
