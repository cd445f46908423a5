use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_member, get_member, list_members};
use crate::middleware::auth::{JwtKeys, require_auth};

pub fn routes(keys: JwtKeys) -> Router<Database> {
    Router::new()
        .route("/", get(list_members))
        .route("/", post(create_member))
        .route("/:id", get(get_member))
        .route_layer(middleware::from_fn_with_state(keys, require_auth))
}
