use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::category::UpdateCategoryRequest;
use crate::error::{Result, StorageError};
use crate::models::WeightCategory;
use crate::repository::category::CategoryRepository;

/// Bounds a category would have after merging a partial update with the
/// stored values.
pub fn effective_bounds(
    existing: &WeightCategory,
    req: &UpdateCategoryRequest,
) -> (Decimal, Decimal) {
    (
        req.min_weight.unwrap_or(existing.min_weight),
        req.max_weight.unwrap_or(existing.max_weight),
    )
}

/// Inclusive bounds must stay ordered; checked here rather than left to the
/// database so the caller gets a reason back instead of a raw CHECK failure.
pub fn check_bounds(min_weight: Decimal, max_weight: Decimal) -> std::result::Result<(), String> {
    if min_weight > max_weight {
        return Err(format!(
            "minimum weight {}kg must not exceed maximum weight {}kg",
            min_weight, max_weight
        ));
    }
    Ok(())
}

/// Update a weight category after validating the merged bounds.
pub async fn update_category(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateCategoryRequest,
) -> Result<WeightCategory> {
    let repo = CategoryRepository::new(pool);
    let existing = repo.find_by_id(id).await?;

    let (min_weight, max_weight) = effective_bounds(&existing, req);
    check_bounds(min_weight, max_weight).map_err(StorageError::Validation)?;

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

    fn update(min: Option<Decimal>, max: Option<Decimal>) -> UpdateCategoryRequest {
        UpdateCategoryRequest {
            name: None,
            min_weight: min,
            max_weight: max,
        }
    }

    #[test]
    fn partial_update_merges_with_stored_bounds() {
        let existing = category(dec!(60), dec!(70));

        assert_eq!(
            effective_bounds(&existing, &update(Some(dec!(62)), None)),
            (dec!(62), dec!(70))
        );
        assert_eq!(
            effective_bounds(&existing, &update(None, Some(dec!(75)))),
            (dec!(60), dec!(75))
        );
        assert_eq!(
            effective_bounds(&existing, &update(None, None)),
            (dec!(60), dec!(70))
        );
    }

    #[test]
    fn inverted_merged_bounds_are_rejected() {
        let existing = category(dec!(60), dec!(70));

        // Raising only the minimum past the stored maximum must fail even
        // though each field is valid on its own.
        let (min, max) = effective_bounds(&existing, &update(Some(dec!(75)), None));
        let err = check_bounds(min, max).unwrap_err();
        assert!(err.contains("must not exceed"));

        // Lowering only the maximum below the stored minimum fails too.
        let (min, max) = effective_bounds(&existing, &update(None, Some(dec!(55))));
        assert!(check_bounds(min, max).is_err());
    }

    #[test]
    fn ordered_bounds_pass() {
        assert!(check_bounds(dec!(60), dec!(70)).is_ok());
        assert!(check_bounds(dec!(60), dec!(60)).is_ok());
    }
}
