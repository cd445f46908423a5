use sqlx::PgPool;
use storage::{dto::relay::RelayWithEntrants, error::Result, repository::relay::RelayRepository};

/// Relays of a competition with their accepted entrants
pub async fn list_relays(pool: &PgPool, competition_id: i32) -> Result<Vec<RelayWithEntrants>> {
    let repo = RelayRepository::new(pool);
    repo.list_by_competition_with_entrants(competition_id).await
}
