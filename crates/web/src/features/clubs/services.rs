use sqlx::PgPool;
use storage::{
    dto::club::{ClubFilter, CreateClubRequest},
    error::Result,
    models::Club,
    repository::club::ClubRepository,
};

/// Paged club listing with total count
pub async fn list_clubs(pool: &PgPool, filter: &ClubFilter) -> Result<(Vec<Club>, i64)> {
    let repo = ClubRepository::new(pool);
    repo.list(filter).await
}

/// Get club by id
pub async fn get_club(pool: &PgPool, id: i32) -> Result<Club> {
    let repo = ClubRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new club
pub async fn create_club(pool: &PgPool, request: &CreateClubRequest) -> Result<Club> {
    let repo = ClubRepository::new(pool);
    repo.create(request).await
}
