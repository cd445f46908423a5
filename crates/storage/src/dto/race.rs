use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::common::EntrantInfo;
use crate::models::Race;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RaceResponse {
    pub id: i32,
    pub competition_id: i32,
    pub distance_m: i32,
    pub style: String,
    pub gender: Option<String>,
    pub description: Option<String>,
}

impl From<Race> for RaceResponse {
    fn from(race: Race) -> Self {
        Self {
            id: race.id,
            competition_id: race.competition_id,
            distance_m: race.distance_m,
            style: race.style,
            gender: race.gender,
            description: race.description,
        }
    }
}

/// Public listing entry: a race together with its accepted entrants.
#[derive(Debug, Serialize, ToSchema)]
pub struct RaceWithEntrants {
    #[serde(flatten)]
    pub race: RaceResponse,
    pub entrants: Vec<EntrantInfo>,
}
