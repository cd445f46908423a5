use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::dto::order::OrderFilter;
use crate::error::{Result, StorageError};
use crate::models::{NewOrder, Order, OrderStatus};

const ORDER_COLUMNS: &str = "id, competition_id, first_name, last_name, middle_name, birthdate, \
     gender, club_name, location, email, phone, cryathlon_id, additional, \
     status, processed, created_at";

pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert the order row and its race/relay links in one transaction.
    pub async fn create(&self, new: &NewOrder) -> Result<Order> {
        let mut tx = self.pool.begin().await?;

        let order = sqlx::query_as::<_, Order>(&format!(
            r#"
            INSERT INTO orders
                (competition_id, first_name, last_name, middle_name, birthdate,
                 gender, club_name, location, email, phone, cryathlon_id,
                 additional, status, processed)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, FALSE)
            RETURNING {}
            "#,
            ORDER_COLUMNS
        ))
        .bind(new.competition_id)
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(&new.middle_name)
        .bind(new.birthdate)
        .bind(&new.gender)
        .bind(&new.club_name)
        .bind(&new.location)
        .bind(&new.email)
        .bind(&new.phone)
        .bind(new.cryathlon_id)
        .bind(&new.additional)
        .bind(OrderStatus::New.as_str())
        .fetch_one(&mut *tx)
        .await?;

        if !new.race_ids.is_empty() {
            sqlx::query(
                "INSERT INTO order_races (order_id, race_id) SELECT $1, unnest($2::int4[])",
            )
            .bind(order.id)
            .bind(&new.race_ids)
            .execute(&mut *tx)
            .await?;
        }

        if !new.relay_ids.is_empty() {
            sqlx::query(
                "INSERT INTO order_relays (order_id, relay_id) SELECT $1, unnest($2::int4[])",
            )
            .bind(order.id)
            .bind(&new.relay_ids)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(order)
    }

    /// Paged admin listing plus total matching count.
    pub async fn list(&self, filter: &OrderFilter) -> Result<(Vec<Order>, i64)> {
        let total = self.count(filter).await?;

        let mut query = QueryBuilder::new(format!(
            "SELECT {} FROM orders WHERE 1=1",
            ORDER_COLUMNS
        ));
        push_predicates(&mut query, filter);

        query.push(" ORDER BY created_at DESC, id DESC");
        query.push(" LIMIT ");
        query.push_bind(filter.limit as i64);
        query.push(" OFFSET ");
        query.push_bind(filter.offset as i64);

        let orders = query.build_query_as::<Order>().fetch_all(self.pool).await?;

        Ok((orders, total))
    }

    async fn count(&self, filter: &OrderFilter) -> Result<i64> {
        let mut query = QueryBuilder::new("SELECT COUNT(*) FROM orders WHERE 1=1");
        push_predicates(&mut query, filter);

        let count = query
            .build_query_scalar::<i64>()
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Order> {
        let order = sqlx::query_as::<_, Order>(&format!(
            "SELECT {} FROM orders WHERE id = $1",
            ORDER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(order)
    }

    /// Update status and/or processed; omitted fields keep their value. The
    /// statement refuses to move a rejected order to a live status, so a
    /// concurrent PATCH cannot slip past the transition check.
    pub async fn update(
        &self,
        id: i32,
        status: Option<&str>,
        processed: Option<bool>,
    ) -> Result<Order> {
        let order = sqlx::query_as::<_, Order>(&update_statement())
            .bind(id)
            .bind(status)
            .bind(processed)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(order)
    }
}

fn update_statement() -> String {
    format!(
        r#"
        UPDATE orders
        SET status = COALESCE($2, status),
            processed = COALESCE($3, processed)
        WHERE id = $1
          AND ($2::text IS NULL OR $2 = '{rejected}' OR status != '{rejected}')
        RETURNING {columns}
        "#,
        rejected = OrderStatus::REJECTED,
        columns = ORDER_COLUMNS
    )
}

fn push_predicates(query: &mut QueryBuilder<'_, Postgres>, filter: &OrderFilter) {
    if let Some(competition_id) = filter.competition_id {
        query.push(" AND competition_id = ");
        query.push_bind(competition_id);
    }

    if let Some(ref status) = filter.status {
        query.push(" AND status = ");
        query.push_bind(status.clone());
    }

    if let Some(processed) = filter.processed {
        query.push(" AND processed = ");
        query.push_bind(processed);
    }
}

#[cfg(test)]
mod tests {
    use super::update_statement;

    #[test]
    fn update_refuses_to_revive_rejected_orders() {
        let sql = update_statement();
        assert!(sql.contains("$2::text IS NULL"));
        assert!(sql.contains("$2 = 'rejected'"));
        assert!(sql.contains("status != 'rejected'"));
    }
}
