use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use storage::Database;

use super::handlers::{
    create_competition, delete_competition, get_competition, list_competitions,
};
use crate::middleware::auth::{JwtKeys, require_auth};

pub fn routes(keys: JwtKeys) -> Router<Database> {
    Router::new()
        .route("/", get(list_competitions))
        .route("/", post(create_competition))
        .route("/:id", get(get_competition))
        .route("/:id", delete(delete_competition))
        .route_layer(middleware::from_fn_with_state(keys, require_auth))
}
