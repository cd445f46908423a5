use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::common::DataResponse,
    dto::relay::RelayWithEntrants,
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/competitions/{id}/relays",
    params(
        ("id" = i32, Path, description = "Competition id")
    ),
    responses(
        (status = 200, description = "Relays of the competition with accepted entrants", body = DataResponse<Vec<RelayWithEntrants>>)
    ),
    tag = "relays"
)]
pub async fn list_relays(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let relays = services::list_relays(db.pool(), id).await?;

    Ok(Json(DataResponse::new(relays)).into_response())
}
