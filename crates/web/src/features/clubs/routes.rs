use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_club, get_club, list_clubs};
use crate::middleware::auth::{JwtKeys, require_auth};

pub fn routes(keys: JwtKeys) -> Router<Database> {
    Router::new()
        .route("/", get(list_clubs))
        .route("/", post(create_club))
        .route("/:id", get(get_club))
        .route_layer(middleware::from_fn_with_state(keys, require_auth))
}
