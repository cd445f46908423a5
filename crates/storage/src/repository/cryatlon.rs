use std::collections::HashMap;

use sqlx::PgPool;

use crate::dto::common::EntrantInfo;
use crate::dto::cryatlon::CryatlonWithEntrants;
use crate::error::Result;
use crate::models::{Cryatlon, OrderStatus};

const CRYATLON_COLUMNS: &str = "id, competition_id, name, description";

pub struct CryatlonRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CryatlonRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Resolve one cryatlon id within a competition; `None` when the id does
    /// not exist there.
    pub async fn find_in_competition(
        &self,
        competition_id: i32,
        id: i32,
    ) -> Result<Option<Cryatlon>> {
        let cryatlon = sqlx::query_as::<_, Cryatlon>(&format!(
            "SELECT {} FROM cryatlons WHERE competition_id = $1 AND id = $2",
            CRYATLON_COLUMNS
        ))
        .bind(competition_id)
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(cryatlon)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Cryatlon>> {
        let cryatlon = sqlx::query_as::<_, Cryatlon>(&format!(
            "SELECT {} FROM cryatlons WHERE id = $1",
            CRYATLON_COLUMNS
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(cryatlon)
    }

    /// Public reporting view: every cryatlon of the competition with its
    /// entrants, rejected orders excluded.
    pub async fn list_by_competition_with_entrants(
        &self,
        competition_id: i32,
    ) -> Result<Vec<CryatlonWithEntrants>> {
        let cryatlons = sqlx::query_as::<_, Cryatlon>(&format!(
            "SELECT {} FROM cryatlons WHERE competition_id = $1 ORDER BY id",
            CRYATLON_COLUMNS
        ))
        .bind(competition_id)
        .fetch_all(self.pool)
        .await?;

        let entrants = sqlx::query_as::<_, EntrantInfo>(
            r#"
            SELECT o.cryathlon_id AS activity_id, o.first_name, o.last_name, o.club_name
            FROM orders o
            INNER JOIN cryatlons c ON c.id = o.cryathlon_id
            WHERE c.competition_id = $1 AND o.status != $2
            ORDER BY o.last_name, o.first_name
            "#,
        )
        .bind(competition_id)
        .bind(OrderStatus::REJECTED)
        .fetch_all(self.pool)
        .await?;

        let mut by_cryatlon: HashMap<i32, Vec<EntrantInfo>> = HashMap::new();
        for entrant in entrants {
            by_cryatlon
                .entry(entrant.activity_id)
                .or_default()
                .push(entrant);
        }

        Ok(cryatlons
            .into_iter()
            .map(|cryatlon| {
                let entrants = by_cryatlon.remove(&cryatlon.id).unwrap_or_default();
                CryatlonWithEntrants {
                    cryatlon: cryatlon.into(),
                    entrants,
                }
            })
            .collect())
    }
}
