use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use storage::{
    Database,
    dto::common::{DataResponse, ListResponse, validate_page},
    dto::order::{CreateOrderRequest, OrderFilter, OrderResponse, UpdateOrderRequest},
    models::Order,
};
use validator::Validate;

use crate::error::WebError;
use crate::mail::MailNotifier;

use super::services::{self, CreateOrderError, UpdateOrderError};

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created", body = DataResponse<OrderResponse>),
        (status = 400, description = "Validation error, or no activities named (`no_orders`)"),
        (status = 403, description = "Registration closed for the competition (`registration_closed`)"),
        (status = 404, description = "Competition not found (`competition_not_found`)"),
        (status = 500, description = "Persistence failure (`exception_error`)")
    ),
    tag = "orders"
)]
pub async fn create_order(
    State(db): State<Database>,
    Extension(notifier): Extension<MailNotifier>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    match services::create_order(db.pool(), &req).await {
        Ok((competition, order)) => {
            // The order is committed at this point; a failed notification is
            // logged, not surfaced to the entrant.
            if let Err(err) = notifier.send_new_order_notify(&order, &competition).await {
                tracing::error!(order_id = order.id, "Failed to send order notification: {:#}", err);
            }

            Ok(Json(DataResponse::new(order)).into_response())
        }
        Err(err @ CreateOrderError::CompetitionNotFound) => {
            Ok((StatusCode::NOT_FOUND, Json(json!({ "error": err.code() }))).into_response())
        }
        Err(err @ CreateOrderError::RegistrationClosed) => {
            Ok((StatusCode::FORBIDDEN, Json(json!({ "error": err.code() }))).into_response())
        }
        Err(err @ CreateOrderError::NoActivities) => {
            Ok((StatusCode::BAD_REQUEST, Json(json!({ "error": err.code() }))).into_response())
        }
        Err(err @ CreateOrderError::Storage(_)) => {
            tracing::error!("Order creation failed: {:?}", err);
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": err.code() })),
            )
                .into_response())
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/orders",
    params(OrderFilter),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Paged order listing", body = ListResponse<Order>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "orders"
)]
pub async fn list_orders(
    State(db): State<Database>,
    Query(filter): Query<OrderFilter>,
) -> Result<Response, WebError> {
    validate_page(filter.limit).map_err(WebError::BadRequest)?;

    let (orders, total) = services::list_orders(db.pool(), &filter).await?;

    // The listing stays flat; activity details are loaded per order via
    // GET /api/orders/{id}.
    Ok(Json(ListResponse::new(orders, total, filter.limit, filter.offset)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Order with resolved activities", body = DataResponse<OrderResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Order not found")
    ),
    tag = "orders"
)]
pub async fn get_order(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let order = services::get_order(db.pool(), id).await?;

    Ok(Json(DataResponse::new(order)).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order id")
    ),
    request_body = UpdateOrderRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Order updated", body = DataResponse<OrderResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Order is rejected; status is terminal")
    ),
    tag = "orders"
)]
pub async fn update_order(
    State(db): State<Database>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateOrderRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let order = services::update_order(db.pool(), id, &req)
        .await
        .map_err(|err| match err {
            UpdateOrderError::RejectedIsTerminal => {
                WebError::Conflict("Rejected orders cannot change status".to_string())
            }
            UpdateOrderError::CorruptStatus(msg) => WebError::InternalServerError(msg),
            UpdateOrderError::Storage(e) => WebError::from(e),
        })?;

    Ok(Json(DataResponse::new(order)).into_response())
}
