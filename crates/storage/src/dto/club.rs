use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::common::{SortDirection, default_limit};

/// Query filter for the club listing.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ClubFilter {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    pub sort: Option<String>,
    pub direction: Option<SortDirection>,
    /// Free-text search over name and location.
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateClubRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,

    #[validate(length(max = 255))]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClubResponse {
    pub id: i32,
    pub name: String,
    pub location: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<crate::models::Club> for ClubResponse {
    fn from(club: crate::models::Club) -> Self {
        Self {
            id: club.id,
            name: club.name,
            location: club.location,
            created_at: club.created_at,
        }
    }
}
