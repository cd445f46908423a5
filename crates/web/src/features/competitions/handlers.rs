use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::common::DataResponse,
    dto::competition::{CompetitionResponse, CreateCompetitionRequest},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/competitions",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "All competitions, newest first", body = DataResponse<Vec<CompetitionResponse>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "competitions"
)]
pub async fn list_competitions(State(db): State<Database>) -> Result<Response, WebError> {
    let competitions = services::list_competitions(db.pool()).await?;

    let data: Vec<CompetitionResponse> = competitions
        .into_iter()
        .map(CompetitionResponse::from)
        .collect();

    Ok(Json(DataResponse::new(data)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/competitions/{id}",
    params(
        ("id" = i32, Path, description = "Competition id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Competition found", body = DataResponse<CompetitionResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Competition not found")
    ),
    tag = "competitions"
)]
pub async fn get_competition(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let competition = services::get_competition(db.pool(), id).await?;

    Ok(Json(DataResponse::new(CompetitionResponse::from(competition))).into_response())
}

#[utoipa::path(
    post,
    path = "/api/competitions",
    request_body = CreateCompetitionRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Competition created", body = DataResponse<CompetitionResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "competitions"
)]
pub async fn create_competition(
    State(db): State<Database>,
    Json(req): Json<CreateCompetitionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let competition = services::create_competition(db.pool(), &req).await?;

    Ok(Json(DataResponse::new(CompetitionResponse::from(competition))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/competitions/{id}",
    params(
        ("id" = i32, Path, description = "Competition id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Competition deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Competition not found"),
        (status = 409, description = "Competition has registered orders")
    ),
    tag = "competitions"
)]
pub async fn delete_competition(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    services::delete_competition(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
