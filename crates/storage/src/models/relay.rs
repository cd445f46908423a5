use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Relay {
    pub id: i32,
    pub competition_id: i32,
    pub distance_m: i32,
    pub style: String,
    pub team_size: i32,
    pub description: Option<String>,
}
