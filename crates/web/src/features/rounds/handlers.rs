use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use storage::{
    dto::round::{
        EligibilityCheckRequest, EligibilityCheckResponse, RoundResponse, SubmitRoundRequest,
    },
    Database,
};
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListRoundsParams {
    /// Restrict the listing to one tournament
    pub tournament_id: Option<Uuid>,
}

#[utoipa::path(
    get,
    path = "/api/rounds",
    params(ListRoundsParams),
    responses(
        (status = 200, description = "List rounds, optionally filtered by tournament", body = Vec<RoundResponse>)
    ),
    tag = "rounds"
)]
pub async fn list_rounds(
    State(db): State<Database>,
    Query(params): Query<ListRoundsParams>,
) -> Result<Response, WebError> {
    let rounds = services::list_rounds(db.pool(), params.tournament_id).await?;

    let response: Vec<RoundResponse> = rounds.into_iter().map(RoundResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/rounds/{id}",
    params(
        ("id" = Uuid, Path, description = "Round ID")
    ),
    responses(
        (status = 200, description = "Round found", body = RoundResponse),
        (status = 404, description = "Round not found")
    ),
    tag = "rounds"
)]
pub async fn get_round(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let round = services::get_round(db.pool(), id).await?;

    Ok(Json(RoundResponse::from(round)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/rounds/eligibility",
    request_body = EligibilityCheckRequest,
    responses(
        (status = 200, description = "Pairing checked; the body says whether it is eligible and why not", body = EligibilityCheckResponse),
        (status = 404, description = "Tournament or athlete not found")
    ),
    tag = "rounds"
)]
pub async fn check_eligibility(
    State(db): State<Database>,
    Json(req): Json<EligibilityCheckRequest>,
) -> Result<Response, WebError> {
    let response = services::check_eligibility(db.pool(), &req).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/rounds",
    request_body = SubmitRoundRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Round resolved: winner recorded, loser eliminated and placed", body = RoundResponse),
        (status = 400, description = "Ineligible pairing or missing/invalid winner"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tournament or athlete not found")
    ),
    tag = "rounds"
)]
pub async fn submit_round(
    State(db): State<Database>,
    Json(req): Json<SubmitRoundRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let round = services::submit_round(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(RoundResponse::from(round))).into_response())
}
