use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use storage::{
    dto::category::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest},
    Database,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List all weight categories, lightest first", body = Vec<CategoryResponse>)
    ),
    tag = "categories"
)]
pub async fn list_categories(State(db): State<Database>) -> Result<Response, WebError> {
    let categories = services::list_categories(db.pool()).await?;

    let response: Vec<CategoryResponse> = categories
        .into_iter()
        .map(CategoryResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(
        ("id" = Uuid, Path, description = "Weight category ID")
    ),
    responses(
        (status = 200, description = "Weight category found", body = CategoryResponse),
        (status = 404, description = "Weight category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let category = services::get_category(db.pool(), id).await?;

    Ok(Json(CategoryResponse::from(category)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Weight category created successfully", body = CategoryResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Category name already taken")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(db): State<Database>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let category = services::create_category(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(
        ("id" = Uuid, Path, description = "Weight category ID")
    ),
    request_body = UpdateCategoryRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Weight category updated successfully", body = CategoryResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Weight category not found")
    ),
    tag = "categories"
)]
pub async fn update_category(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCategoryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let category = services::update_category(db.pool(), id, &req).await?;

    Ok(Json(CategoryResponse::from(category)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(
        ("id" = Uuid, Path, description = "Weight category ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Weight category deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Weight category not found")
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_category(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
