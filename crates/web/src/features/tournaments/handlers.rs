use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use storage::{
    dto::tournament::{
        AddAthletesRequest, CreateTournamentRequest, TournamentDetailResponse, TournamentResponse,
        UpdateTournamentRequest,
    },
    Database,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/tournaments",
    responses(
        (status = 200, description = "List all tournaments successfully", body = Vec<TournamentResponse>)
    ),
    tag = "tournaments"
)]
pub async fn list_tournaments(State(db): State<Database>) -> Result<Response, WebError> {
    let tournaments = services::list_tournaments(db.pool()).await?;

    let response: Vec<TournamentResponse> = tournaments
        .into_iter()
        .map(TournamentResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/tournaments/{id}",
    params(
        ("id" = Uuid, Path, description = "Tournament ID")
    ),
    responses(
        (status = 200, description = "Tournament found", body = TournamentResponse),
        (status = 404, description = "Tournament not found")
    ),
    tag = "tournaments"
)]
pub async fn get_tournament(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let tournament = services::get_tournament(db.pool(), id).await?;

    Ok(Json(TournamentResponse::from(tournament)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/tournaments/{id}/detailed",
    params(
        ("id" = Uuid, Path, description = "Tournament ID")
    ),
    responses(
        (status = 200, description = "Tournament with rounds and the active roster grouped by gender and weight category", body = TournamentDetailResponse),
        (status = 404, description = "Tournament not found")
    ),
    tag = "tournaments"
)]
pub async fn get_tournament_detailed(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let detail = services::get_tournament_detailed(db.pool(), id).await?;

    Ok(Json(detail).into_response())
}

#[utoipa::path(
    post,
    path = "/api/tournaments",
    request_body = CreateTournamentRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Tournament created successfully", body = TournamentResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "tournaments"
)]
pub async fn create_tournament(
    State(db): State<Database>,
    Json(req): Json<CreateTournamentRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let tournament = services::create_tournament(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(TournamentResponse::from(tournament))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/tournaments/{id}",
    params(
        ("id" = Uuid, Path, description = "Tournament ID")
    ),
    request_body = UpdateTournamentRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Tournament updated successfully", body = TournamentResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tournament not found")
    ),
    tag = "tournaments"
)]
pub async fn update_tournament(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTournamentRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let tournament = services::update_tournament(db.pool(), id, &req).await?;

    Ok(Json(TournamentResponse::from(tournament)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/tournaments/{id}",
    params(
        ("id" = Uuid, Path, description = "Tournament ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Tournament deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tournament not found")
    ),
    tag = "tournaments"
)]
pub async fn delete_tournament(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_tournament(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/tournaments/{id}/athletes",
    params(
        ("id" = Uuid, Path, description = "Tournament ID")
    ),
    request_body = AddAthletesRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Athletes added to the active roster"),
        (status = 400, description = "Validation error, including weight outside the assigned category bounds"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tournament or athlete not found")
    ),
    tag = "tournaments"
)]
pub async fn add_athletes(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<AddAthletesRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    services::add_athletes(db.pool(), id, &req).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    delete,
    path = "/api/tournaments/{id}/athletes/{athlete_id}",
    params(
        ("id" = Uuid, Path, description = "Tournament ID"),
        ("athlete_id" = Uuid, Path, description = "Athlete ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Athlete removed from the active roster"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tournament or athlete not found")
    ),
    tag = "tournaments"
)]
pub async fn remove_athlete(
    State(db): State<Database>,
    Path((id, athlete_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    services::remove_athlete(db.pool(), id, athlete_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
