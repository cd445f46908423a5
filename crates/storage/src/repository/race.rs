use std::collections::HashMap;

use sqlx::PgPool;

use crate::dto::common::EntrantInfo;
use crate::dto::race::RaceWithEntrants;
use crate::error::Result;
use crate::models::{OrderStatus, Race};

const RACE_COLUMNS: &str = "id, competition_id, distance_m, style, gender, description";

pub struct RaceRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RaceRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Resolve a set of race ids within one competition. Ids that do not
    /// exist, or belong to a different competition, are simply not returned.
    pub async fn find_by_ids(&self, competition_id: i32, ids: &[i32]) -> Result<Vec<Race>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let races = sqlx::query_as::<_, Race>(&format!(
            "SELECT {} FROM races WHERE competition_id = $1 AND id = ANY($2)",
            RACE_COLUMNS
        ))
        .bind(competition_id)
        .bind(ids)
        .fetch_all(self.pool)
        .await?;

        Ok(races)
    }

    /// Races linked to a given order.
    pub async fn list_by_order(&self, order_id: i32) -> Result<Vec<Race>> {
        let races = sqlx::query_as::<_, Race>(
            r#"
            SELECT r.id, r.competition_id, r.distance_m, r.style, r.gender, r.description
            FROM races r
            INNER JOIN order_races orr ON orr.race_id = r.id
            WHERE orr.order_id = $1
            ORDER BY r.id
            "#,
        )
        .bind(order_id)
        .fetch_all(self.pool)
        .await?;

        Ok(races)
    }

    /// Public reporting view: every race of the competition with its
    /// entrants, rejected orders excluded.
    pub async fn list_by_competition_with_entrants(
        &self,
        competition_id: i32,
    ) -> Result<Vec<RaceWithEntrants>> {
        let races = sqlx::query_as::<_, Race>(&format!(
            "SELECT {} FROM races WHERE competition_id = $1 ORDER BY id",
            RACE_COLUMNS
        ))
        .bind(competition_id)
        .fetch_all(self.pool)
        .await?;

        let entrants = sqlx::query_as::<_, EntrantInfo>(
            r#"
            SELECT orr.race_id AS activity_id, o.first_name, o.last_name, o.club_name
            FROM order_races orr
            INNER JOIN orders o ON o.id = orr.order_id
            INNER JOIN races r ON r.id = orr.race_id
            WHERE r.competition_id = $1 AND o.status != $2
            ORDER BY o.last_name, o.first_name
            "#,
        )
        .bind(competition_id)
        .bind(OrderStatus::REJECTED)
        .fetch_all(self.pool)
        .await?;

        Ok(group_entrants(races, entrants))
    }
}

fn group_entrants(races: Vec<Race>, entrants: Vec<EntrantInfo>) -> Vec<RaceWithEntrants> {
    let mut by_race: HashMap<i32, Vec<EntrantInfo>> = HashMap::new();
    for entrant in entrants {
        by_race.entry(entrant.activity_id).or_default().push(entrant);
    }

    races
        .into_iter()
        .map(|race| {
            let entrants = by_race.remove(&race.id).unwrap_or_default();
            RaceWithEntrants {
                race: race.into(),
                entrants,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn race(id: i32) -> Race {
        Race {
            id,
            competition_id: 1,
            distance_m: 50,
            style: "butterfly".into(),
            gender: None,
            description: None,
        }
    }

    fn entrant(activity_id: i32, last_name: &str) -> EntrantInfo {
        EntrantInfo {
            activity_id,
            first_name: "A".into(),
            last_name: last_name.into(),
            club_name: "Wave".into(),
        }
    }

    #[test]
    fn entrants_group_under_their_race() {
        let grouped = group_entrants(
            vec![race(1), race(2)],
            vec![entrant(1, "Koval"), entrant(2, "Bondar"), entrant(1, "Shevchenko")],
        );

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].entrants.len(), 2);
        assert_eq!(grouped[1].entrants.len(), 1);
    }

    #[test]
    fn race_without_entrants_stays_listed() {
        let grouped = group_entrants(vec![race(5)], vec![]);
        assert_eq!(grouped.len(), 1);
        assert!(grouped[0].entrants.is_empty());
    }
}
