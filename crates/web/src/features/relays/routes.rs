use axum::{Router, routing::get};
use storage::Database;

use super::handlers::list_relays;

// Public, mounted under /api/competitions.
pub fn routes() -> Router<Database> {
    Router::new().route("/:id/relays", get(list_relays))
}
