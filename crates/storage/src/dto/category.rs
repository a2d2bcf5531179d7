use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::WeightCategory;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub category_id: Uuid,
    pub name: String,
    pub min_weight: Decimal,
    pub max_weight: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_bounds"))]
pub struct CreateCategoryRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Category name must be between 1 and 100 characters"
    ))]
    pub name: String,

    pub min_weight: Decimal,

    pub max_weight: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    pub min_weight: Option<Decimal>,

    pub max_weight: Option<Decimal>,
}

fn validate_bounds(req: &CreateCategoryRequest) -> Result<(), validator::ValidationError> {
    if req.min_weight > req.max_weight {
        return Err(validator::ValidationError::new("min_weight_above_max"));
    }
    Ok(())
}

impl From<WeightCategory> for CategoryResponse {
    fn from(category: WeightCategory) -> Self {
        Self {
            category_id: category.category_id,
            name: category.name,
            min_weight: category.min_weight,
            max_weight: category.max_weight,
        }
    }
}
