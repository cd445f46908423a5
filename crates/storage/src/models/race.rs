use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Race {
    pub id: i32,
    pub competition_id: i32,
    pub distance_m: i32,
    pub style: String,
    pub gender: Option<String>,
    pub description: Option<String>,
}
