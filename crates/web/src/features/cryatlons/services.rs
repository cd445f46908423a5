use sqlx::PgPool;
use storage::{
    dto::cryatlon::CryatlonWithEntrants,
    error::Result,
    repository::cryatlon::CryatlonRepository,
};

/// Cryatlons of a competition with their accepted entrants
pub async fn list_cryatlons(
    pool: &PgPool,
    competition_id: i32,
) -> Result<Vec<CryatlonWithEntrants>> {
    let repo = CryatlonRepository::new(pool);
    repo.list_by_competition_with_entrants(competition_id).await
}
