use sqlx::PgPool;
use storage::{dto::race::RaceWithEntrants, error::Result, repository::race::RaceRepository};

/// Races of a competition with their accepted entrants
pub async fn list_races(pool: &PgPool, competition_id: i32) -> Result<Vec<RaceWithEntrants>> {
    let repo = RaceRepository::new(pool);
    repo.list_by_competition_with_entrants(competition_id).await
}
