use sqlx::{PgPool, QueryBuilder};

use crate::dto::club::{ClubFilter, CreateClubRequest};
use crate::dto::common::SortDirection;
use crate::error::{Result, StorageError};
use crate::models::Club;

pub struct ClubRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ClubRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Paged club listing with its total matching count.
    pub async fn list(&self, filter: &ClubFilter) -> Result<(Vec<Club>, i64)> {
        let total = self.count(filter).await?;

        let mut query = QueryBuilder::new(
            r#"
            SELECT id, name, location, created_at
            FROM clubs
            WHERE 1=1
            "#,
        );
        push_search(&mut query, filter.search.as_deref());

        query.push(" ORDER BY ");
        query.push(sort_column(filter.sort.as_deref()));
        query.push(" ");
        query.push(
            filter
                .direction
                .unwrap_or(SortDirection::Asc)
                .as_sql(),
        );
        query.push(" LIMIT ");
        query.push_bind(filter.limit as i64);
        query.push(" OFFSET ");
        query.push_bind(filter.offset as i64);

        let clubs = query.build_query_as::<Club>().fetch_all(self.pool).await?;

        Ok((clubs, total))
    }

    async fn count(&self, filter: &ClubFilter) -> Result<i64> {
        let mut query = QueryBuilder::new("SELECT COUNT(*) FROM clubs WHERE 1=1");
        push_search(&mut query, filter.search.as_deref());

        let count = query
            .build_query_scalar::<i64>()
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Club> {
        let club = sqlx::query_as::<_, Club>(
            r#"
            SELECT id, name, location, created_at
            FROM clubs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(club)
    }

    pub async fn create(&self, req: &CreateClubRequest) -> Result<Club> {
        let club = sqlx::query_as::<_, Club>(
            r#"
            INSERT INTO clubs (name, location)
            VALUES ($1, $2)
            RETURNING id, name, location, created_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.location)
        .fetch_one(self.pool)
        .await?;

        Ok(club)
    }
}

fn push_search(query: &mut QueryBuilder<'_, sqlx::Postgres>, search: Option<&str>) {
    if let Some(search) = search {
        let pattern = format!("%{}%", search);
        query.push(" AND (name ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR location ILIKE ");
        query.push_bind(pattern);
        query.push(")");
    }
}

// Sort input is matched against a whitelist, never spliced into SQL.
fn sort_column(sort: Option<&str>) -> &'static str {
    match sort {
        Some("created_at") => "created_at",
        _ => "name",
    }
}

#[cfg(test)]
mod tests {
    use super::sort_column;

    #[test]
    fn sort_falls_back_to_name() {
        assert_eq!(sort_column(None), "name");
        assert_eq!(sort_column(Some("created_at")), "created_at");
        assert_eq!(sort_column(Some("location; DROP TABLE clubs")), "name");
    }
}
