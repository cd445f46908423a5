use std::collections::HashMap;

use sqlx::PgPool;

use crate::dto::common::EntrantInfo;
use crate::dto::relay::RelayWithEntrants;
use crate::error::Result;
use crate::models::{OrderStatus, Relay};

const RELAY_COLUMNS: &str = "id, competition_id, distance_m, style, team_size, description";

pub struct RelayRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RelayRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Resolve a set of relay ids within one competition; unknown ids are
    /// not returned.
    pub async fn find_by_ids(&self, competition_id: i32, ids: &[i32]) -> Result<Vec<Relay>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let relays = sqlx::query_as::<_, Relay>(&format!(
            "SELECT {} FROM relays WHERE competition_id = $1 AND id = ANY($2)",
            RELAY_COLUMNS
        ))
        .bind(competition_id)
        .bind(ids)
        .fetch_all(self.pool)
        .await?;

        Ok(relays)
    }

    /// Relays linked to a given order.
    pub async fn list_by_order(&self, order_id: i32) -> Result<Vec<Relay>> {
        let relays = sqlx::query_as::<_, Relay>(
            r#"
            SELECT r.id, r.competition_id, r.distance_m, r.style, r.team_size, r.description
            FROM relays r
            INNER JOIN order_relays orl ON orl.relay_id = r.id
            WHERE orl.order_id = $1
            ORDER BY r.id
            "#,
        )
        .bind(order_id)
        .fetch_all(self.pool)
        .await?;

        Ok(relays)
    }

    /// Public reporting view: every relay of the competition with its
    /// entrants, rejected orders excluded.
    pub async fn list_by_competition_with_entrants(
        &self,
        competition_id: i32,
    ) -> Result<Vec<RelayWithEntrants>> {
        let relays = sqlx::query_as::<_, Relay>(&format!(
            "SELECT {} FROM relays WHERE competition_id = $1 ORDER BY id",
            RELAY_COLUMNS
        ))
        .bind(competition_id)
        .fetch_all(self.pool)
        .await?;

        let entrants = sqlx::query_as::<_, EntrantInfo>(
            r#"
            SELECT orl.relay_id AS activity_id, o.first_name, o.last_name, o.club_name
            FROM order_relays orl
            INNER JOIN orders o ON o.id = orl.order_id
            INNER JOIN relays r ON r.id = orl.relay_id
            WHERE r.competition_id = $1 AND o.status != $2
            ORDER BY o.last_name, o.first_name
            "#,
        )
        .bind(competition_id)
        .bind(OrderStatus::REJECTED)
        .fetch_all(self.pool)
        .await?;

        let mut by_relay: HashMap<i32, Vec<EntrantInfo>> = HashMap::new();
        for entrant in entrants {
            by_relay.entry(entrant.activity_id).or_default().push(entrant);
        }

        Ok(relays
            .into_iter()
            .map(|relay| {
                let entrants = by_relay.remove(&relay.id).unwrap_or_default();
                RelayWithEntrants {
                    relay: relay.into(),
                    entrants,
                }
            })
            .collect())
    }
}
