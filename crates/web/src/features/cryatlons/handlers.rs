use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::common::DataResponse,
    dto::cryatlon::CryatlonWithEntrants,
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/competitions/{id}/cryatlons",
    params(
        ("id" = i32, Path, description = "Competition id")
    ),
    responses(
        (status = 200, description = "Cryatlons of the competition with accepted entrants", body = DataResponse<Vec<CryatlonWithEntrants>>)
    ),
    tag = "cryatlons"
)]
pub async fn list_cryatlons(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let cryatlons = services::list_cryatlons(db.pool(), id).await?;

    Ok(Json(DataResponse::new(cryatlons)).into_response())
}
