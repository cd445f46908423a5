use axum::{Router, routing::get};
use storage::Database;

use super::handlers::list_races;

// Public, mounted under /api/competitions.
pub fn routes() -> Router<Database> {
    Router::new().route("/:id/races", get(list_races))
}
