use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCompetitionRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,

    #[validate(length(max = 255))]
    pub location: Option<String>,

    pub starts_on: NaiveDate,

    #[serde(default = "default_registration_open")]
    pub registration_open: bool,
}

fn default_registration_open() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompetitionResponse {
    pub id: i32,
    pub name: String,
    pub location: Option<String>,
    pub starts_on: NaiveDate,
    pub registration_open: bool,
    pub created_at: NaiveDateTime,
}

impl From<crate::models::Competition> for CompetitionResponse {
    fn from(competition: crate::models::Competition) -> Self {
        Self {
            id: competition.id,
            name: competition.name,
            location: competition.location,
            starts_on: competition.starts_on,
            registration_open: competition.registration_open,
            created_at: competition.created_at,
        }
    }
}
