use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::common::EntrantInfo;
use crate::models::Relay;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RelayResponse {
    pub id: i32,
    pub competition_id: i32,
    pub distance_m: i32,
    pub style: String,
    pub team_size: i32,
    pub description: Option<String>,
}

impl From<Relay> for RelayResponse {
    fn from(relay: Relay) -> Self {
        Self {
            id: relay.id,
            competition_id: relay.competition_id,
            distance_m: relay.distance_m,
            style: relay.style,
            team_size: relay.team_size,
            description: relay.description,
        }
    }
}

/// Public listing entry: a relay together with its accepted entrants.
#[derive(Debug, Serialize, ToSchema)]
pub struct RelayWithEntrants {
    #[serde(flatten)]
    pub relay: RelayResponse,
    pub entrants: Vec<EntrantInfo>,
}
