use axum::{
    Extension, Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_order, get_order, list_orders, update_order};
use crate::mail::MailNotifier;
use crate::middleware::auth::{JwtKeys, require_auth};

pub fn routes(keys: JwtKeys, notifier: MailNotifier) -> Router<Database> {
    let protected = Router::new()
        .route("/", get(list_orders))
        .route("/:id", get(get_order).patch(update_order))
        .route_layer(middleware::from_fn_with_state(keys, require_auth));

    // Entry submission is public: entrants register without an account.
    Router::new()
        .route("/", post(create_order))
        .route_layer(Extension(notifier))
        .merge(protected)
}
