use axum::{Router, routing::get};
use storage::Database;

use super::handlers::list_cryatlons;

// Public, mounted under /api/competitions.
pub fn routes() -> Router<Database> {
    Router::new().route("/:id/cryatlons", get(list_cryatlons))
}
