use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Club {
    pub id: i32,
    pub name: String,
    pub location: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
