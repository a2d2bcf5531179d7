use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use storage::{
    dto::club::{
        ClubDetailResponse, ClubResponse, CoachResponse, CreateClubRequest, CreateCoachRequest,
        UpdateClubRequest,
    },
    Database,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/clubs",
    responses(
        (status = 200, description = "List all clubs successfully", body = Vec<ClubResponse>)
    ),
    tag = "clubs"
)]
pub async fn list_clubs(State(db): State<Database>) -> Result<Response, WebError> {
    let clubs = services::list_clubs(db.pool()).await?;

    let response: Vec<ClubResponse> = clubs.into_iter().map(ClubResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/clubs/{id}",
    params(
        ("id" = Uuid, Path, description = "Club ID")
    ),
    responses(
        (status = 200, description = "Club found", body = ClubResponse),
        (status = 404, description = "Club not found")
    ),
    tag = "clubs"
)]
pub async fn get_club(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let club = services::get_club(db.pool(), id).await?;

    Ok(Json(ClubResponse::from(club)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/clubs/{id}/detailed",
    params(
        ("id" = Uuid, Path, description = "Club ID")
    ),
    responses(
        (status = 200, description = "Club with its coaches", body = ClubDetailResponse),
        (status = 404, description = "Club not found")
    ),
    tag = "clubs"
)]
pub async fn get_club_detailed(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let detail = services::get_club_detailed(db.pool(), id).await?;

    Ok(Json(detail).into_response())
}

#[utoipa::path(
    post,
    path = "/api/clubs",
    request_body = CreateClubRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Club created successfully", body = ClubResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Club name already taken")
    ),
    tag = "clubs"
)]
pub async fn create_club(
    State(db): State<Database>,
    Json(req): Json<CreateClubRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let club = services::create_club(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(ClubResponse::from(club))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/clubs/{id}",
    params(
        ("id" = Uuid, Path, description = "Club ID")
    ),
    request_body = UpdateClubRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Club updated successfully", body = ClubResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Club not found")
    ),
    tag = "clubs"
)]
pub async fn update_club(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateClubRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let club = services::update_club(db.pool(), id, &req).await?;

    Ok(Json(ClubResponse::from(club)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/clubs/{id}",
    params(
        ("id" = Uuid, Path, description = "Club ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Club deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Club not found")
    ),
    tag = "clubs"
)]
pub async fn delete_club(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_club(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/clubs/{id}/coaches",
    params(
        ("id" = Uuid, Path, description = "Club ID")
    ),
    request_body = CreateCoachRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Coach added to club", body = CoachResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Club not found")
    ),
    tag = "clubs"
)]
pub async fn add_coach(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateCoachRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let coach = services::add_coach(db.pool(), id, &req).await?;

    Ok((StatusCode::CREATED, Json(CoachResponse::from(coach))).into_response())
}
