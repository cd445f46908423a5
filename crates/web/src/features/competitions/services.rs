use sqlx::PgPool;
use storage::{
    dto::competition::CreateCompetitionRequest,
    error::Result,
    models::Competition,
    repository::competition::CompetitionRepository,
};

/// List all competitions
pub async fn list_competitions(pool: &PgPool) -> Result<Vec<Competition>> {
    let repo = CompetitionRepository::new(pool);
    repo.list().await
}

/// Get competition by id
pub async fn get_competition(pool: &PgPool, id: i32) -> Result<Competition> {
    let repo = CompetitionRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new competition
pub async fn create_competition(
    pool: &PgPool,
    request: &CreateCompetitionRequest,
) -> Result<Competition> {
    let repo = CompetitionRepository::new(pool);
    repo.create(request).await
}

/// Delete a competition and its cascading activities
pub async fn delete_competition(pool: &PgPool, id: i32) -> Result<()> {
    let repo = CompetitionRepository::new(pool);
    repo.delete(id).await
}
