use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Cryatlon {
    pub id: i32,
    pub competition_id: i32,
    pub name: String,
    pub description: Option<String>,
}
