use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::dto::common::SortDirection;
use crate::dto::member::{CreateMemberRequest, MemberFilter};
use crate::error::{Result, StorageError};
use crate::models::Member;

const MEMBER_COLUMNS: &str = "id, first_name, last_name, middle_name, birthdate, gender, \
     para_swimmer, club_id, email, phone, location, created_at";

const MAX_AGE_YEARS: i32 = 150;

pub struct MemberRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MemberRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Paged member listing plus total matching count. Supports club, gender,
    /// age-range and free-text name predicates.
    pub async fn list(&self, filter: &MemberFilter) -> Result<(Vec<Member>, i64)> {
        let total = self.count(filter).await?;

        let mut query = QueryBuilder::new(format!(
            "SELECT {} FROM members WHERE 1=1",
            MEMBER_COLUMNS
        ));
        push_predicates(&mut query, filter);

        query.push(" ORDER BY ");
        query.push(sort_column(filter.sort.as_deref()));
        query.push(" ");
        query.push(filter.direction.unwrap_or(SortDirection::Asc).as_sql());
        query.push(" LIMIT ");
        query.push_bind(filter.limit as i64);
        query.push(" OFFSET ");
        query.push_bind(filter.offset as i64);

        let members = query
            .build_query_as::<Member>()
            .fetch_all(self.pool)
            .await?;

        Ok((members, total))
    }

    async fn count(&self, filter: &MemberFilter) -> Result<i64> {
        let mut query = QueryBuilder::new("SELECT COUNT(*) FROM members WHERE 1=1");
        push_predicates(&mut query, filter);

        let count = query
            .build_query_scalar::<i64>()
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Member> {
        let member = sqlx::query_as::<_, Member>(&format!(
            "SELECT {} FROM members WHERE id = $1",
            MEMBER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(member)
    }

    pub async fn create(&self, req: &CreateMemberRequest) -> Result<Member> {
        let member = sqlx::query_as::<_, Member>(&format!(
            r#"
            INSERT INTO members
                (first_name, last_name, middle_name, birthdate, gender,
                 para_swimmer, club_id, email, phone, location)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            MEMBER_COLUMNS
        ))
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.middle_name)
        .bind(req.birthdate)
        .bind(&req.gender)
        .bind(req.para_swimmer)
        .bind(req.club_id)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(&req.location)
        .fetch_one(self.pool)
        .await?;

        Ok(member)
    }
}

fn push_predicates(query: &mut QueryBuilder<'_, Postgres>, filter: &MemberFilter) {
    if let Some(club_id) = filter.club_id {
        query.push(" AND club_id = ");
        query.push_bind(club_id);
    }

    if let Some(ref gender) = filter.gender {
        query.push(" AND gender = ");
        query.push_bind(gender.clone());
    }

    // Ages are measured in full years against the birthdate. Clamped so the
    // max_age + 1 arithmetic and make_interval cannot overflow on hostile
    // query input.
    if let Some(min_age) = filter.min_age {
        query.push(" AND birthdate <= CURRENT_DATE - make_interval(years => ");
        query.push_bind(min_age.clamp(0, MAX_AGE_YEARS));
        query.push(")");
    }

    if let Some(max_age) = filter.max_age {
        query.push(" AND birthdate > CURRENT_DATE - make_interval(years => ");
        query.push_bind(max_age.clamp(0, MAX_AGE_YEARS) + 1);
        query.push(")");
    }

    if let Some(ref search) = filter.search {
        let pattern = format!("%{}%", search);
        query.push(" AND (first_name ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR last_name ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR middle_name ILIKE ");
        query.push_bind(pattern);
        query.push(")");
    }
}

fn sort_column(sort: Option<&str>) -> &'static str {
    match sort {
        Some("first_name") => "first_name",
        Some("birthdate") => "birthdate",
        Some("created_at") => "created_at",
        _ => "last_name",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::member::MemberFilter;

    #[test]
    fn sort_whitelist_holds() {
        assert_eq!(sort_column(Some("birthdate")), "birthdate");
        assert_eq!(sort_column(Some("email")), "last_name");
        assert_eq!(sort_column(None), "last_name");
    }

    #[test]
    fn extreme_age_bounds_do_not_overflow() {
        let filter = MemberFilter {
            limit: 20,
            offset: 0,
            sort: None,
            direction: None,
            club_id: None,
            gender: None,
            min_age: Some(i32::MIN),
            max_age: Some(i32::MAX),
            search: None,
        };

        let mut query: QueryBuilder<Postgres> = QueryBuilder::new("SELECT 1 WHERE 1=1");
        push_predicates(&mut query, &filter);

        let sql = query.into_sql();
        assert!(sql.contains("birthdate <="));
        assert!(sql.contains("birthdate >"));
    }
}
