use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::club::{ClubFilter, ClubResponse, CreateClubRequest},
    dto::common::{DataResponse, ListResponse, validate_page},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/clubs",
    params(ClubFilter),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Paged club listing", body = ListResponse<ClubResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "clubs"
)]
pub async fn list_clubs(
    State(db): State<Database>,
    Query(filter): Query<ClubFilter>,
) -> Result<Response, WebError> {
    validate_page(filter.limit).map_err(WebError::BadRequest)?;

    let (clubs, total) = services::list_clubs(db.pool(), &filter).await?;

    let data: Vec<ClubResponse> = clubs.into_iter().map(ClubResponse::from).collect();

    Ok(Json(ListResponse::new(data, total, filter.limit, filter.offset)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/clubs/{id}",
    params(
        ("id" = i32, Path, description = "Club id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Club found", body = DataResponse<ClubResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Club not found")
    ),
    tag = "clubs"
)]
pub async fn get_club(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let club = services::get_club(db.pool(), id).await?;

    Ok(Json(DataResponse::new(ClubResponse::from(club))).into_response())
}

#[utoipa::path(
    post,
    path = "/api/clubs",
    request_body = CreateClubRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Club created", body = DataResponse<ClubResponse>),
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

    let club = services::create_club(db.pool(), &req).await.map_err(|e| {
        if e.is_unique_violation() {
            WebError::Conflict("Club name already taken".to_string())
        } else {
            WebError::from(e)
        }
    })?;

    Ok(Json(DataResponse::new(ClubResponse::from(club))).into_response())
}
