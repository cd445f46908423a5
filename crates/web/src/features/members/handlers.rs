use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::common::{DataResponse, ListResponse, validate_page},
    dto::member::{CreateMemberRequest, MemberFilter, MemberResponse},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/members",
    params(MemberFilter),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Paged member listing", body = ListResponse<MemberResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "members"
)]
pub async fn list_members(
    State(db): State<Database>,
    Query(filter): Query<MemberFilter>,
) -> Result<Response, WebError> {
    validate_page(filter.limit).map_err(WebError::BadRequest)?;

    let (members, total) = services::list_members(db.pool(), &filter).await?;

    let data: Vec<MemberResponse> = members.into_iter().map(MemberResponse::from).collect();

    Ok(Json(ListResponse::new(data, total, filter.limit, filter.offset)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/members/{id}",
    params(
        ("id" = i32, Path, description = "Member id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Member found", body = DataResponse<MemberResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Member not found")
    ),
    tag = "members"
)]
pub async fn get_member(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let member = services::get_member(db.pool(), id).await?;

    Ok(Json(DataResponse::new(MemberResponse::from(member))).into_response())
}

#[utoipa::path(
    post,
    path = "/api/members",
    request_body = CreateMemberRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Member created", body = DataResponse<MemberResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Member could not be persisted")
    ),
    tag = "members"
)]
pub async fn create_member(
    State(db): State<Database>,
    Json(req): Json<CreateMemberRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let member = services::create_member(db.pool(), &req).await?;

    Ok(Json(DataResponse::new(MemberResponse::from(member))).into_response())
}
