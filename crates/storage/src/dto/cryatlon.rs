use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::common::EntrantInfo;
use crate::models::Cryatlon;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CryatlonResponse {
    pub id: i32,
    pub competition_id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl From<Cryatlon> for CryatlonResponse {
    fn from(cryatlon: Cryatlon) -> Self {
        Self {
            id: cryatlon.id,
            competition_id: cryatlon.competition_id,
            name: cryatlon.name,
            description: cryatlon.description,
        }
    }
}

/// Public listing entry: a cryatlon together with its accepted entrants.
#[derive(Debug, Serialize, ToSchema)]
pub struct CryatlonWithEntrants {
    #[serde(flatten)]
    pub cryatlon: CryatlonResponse,
    pub entrants: Vec<EntrantInfo>,
}
