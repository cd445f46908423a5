use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Competition {
    pub id: i32,
    pub name: String,
    pub location: Option<String>,
    pub starts_on: chrono::NaiveDate,
    pub registration_open: bool,
    pub created_at: chrono::NaiveDateTime,
}
