use sqlx::PgPool;
use storage::{
    dto::member::{CreateMemberRequest, MemberFilter},
    error::Result,
    models::Member,
    repository::member::MemberRepository,
};

/// Paged member listing with total count
pub async fn list_members(pool: &PgPool, filter: &MemberFilter) -> Result<(Vec<Member>, i64)> {
    let repo = MemberRepository::new(pool);
    repo.list(filter).await
}

/// Get member by id
pub async fn get_member(pool: &PgPool, id: i32) -> Result<Member> {
    let repo = MemberRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new member
pub async fn create_member(pool: &PgPool, request: &CreateMemberRequest) -> Result<Member> {
    let repo = MemberRepository::new(pool);
    repo.create(request).await
}
