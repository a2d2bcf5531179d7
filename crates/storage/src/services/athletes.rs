use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::athlete::{CreateAthleteRequest, UpdateAthleteRequest};
use crate::error::{Result, StorageError};
use crate::models::{Athlete, WeightCategory};
use crate::repository::athlete::AthleteRepository;
use crate::repository::category::CategoryRepository;

/// Weight must fall inside the assigned category's inclusive bounds.
///
/// Checked at athlete save and roster-add time; storage does not enforce it.
pub fn check_category_consistency(
    weight: Decimal,
    category: Option<&WeightCategory>,
) -> std::result::Result<(), String> {
    match category {
        Some(cat) if !cat.contains(weight) => Err(format!(
            "athlete weight {}kg is outside the {} category bounds ({}kg-{}kg)",
            weight, cat.name, cat.min_weight, cat.max_weight
        )),
        _ => Ok(()),
    }
}

async fn load_category(pool: &PgPool, id: Option<Uuid>) -> Result<Option<WeightCategory>> {
    match id {
        Some(id) => Ok(Some(CategoryRepository::new(pool).find_by_id(id).await?)),
        None => Ok(None),
    }
}

/// Create an athlete after validating category consistency.
pub async fn create_athlete(pool: &PgPool, req: &CreateAthleteRequest) -> Result<Athlete> {
    let category = load_category(pool, req.weight_category_id).await?;
    check_category_consistency(req.weight, category.as_ref()).map_err(StorageError::Validation)?;

    AthleteRepository::new(pool).create(req).await
}

/// Update an athlete after validating category consistency against the
/// effective weight and category.
pub async fn update_athlete(pool: &PgPool, id: Uuid, req: &UpdateAthleteRequest) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);
    let existing = repo.find_by_id(id).await?;

    let weight = req.weight.unwrap_or(existing.weight);
    let category_id = req.weight_category_id.or(existing.weight_category_id);
    let category = load_category(pool, category_id).await?;
    check_category_consistency(weight, category.as_ref()).map_err(StorageError::Validation)?;

    repo.update(id, &existing, req).await
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
    fn weight_inside_bounds_is_consistent() {
        let cat = category(dec!(60), dec!(70));
        assert!(check_category_consistency(dec!(65), Some(&cat)).is_ok());
        assert!(check_category_consistency(dec!(60), Some(&cat)).is_ok());
        assert!(check_category_consistency(dec!(70), Some(&cat)).is_ok());
    }

    #[test]
    fn weight_outside_bounds_fails_at_save_time() {
        let cat = category(dec!(60), dec!(70));
        let err = check_category_consistency(dec!(75), Some(&cat)).unwrap_err();
        assert!(err.contains("outside"));
        assert!(err.contains("-70kg"));
    }

    #[test]
    fn no_category_means_no_bounds_check() {
        assert!(check_category_consistency(dec!(120), None).is_ok());
    }
}
