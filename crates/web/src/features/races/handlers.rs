use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::common::DataResponse,
    dto::race::RaceWithEntrants,
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/competitions/{id}/races",
    params(
        ("id" = i32, Path, description = "Competition id")
    ),
    responses(
        (status = 200, description = "Races of the competition with accepted entrants", body = DataResponse<Vec<RaceWithEntrants>>)
    ),
    tag = "races"
)]
pub async fn list_races(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let races = services::list_races(db.pool(), id).await?;

    Ok(Json(DataResponse::new(races)).into_response())
}
