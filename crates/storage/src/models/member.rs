use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Member {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub birthdate: chrono::NaiveDate,
    pub gender: String,
    pub para_swimmer: bool,
    pub club_id: Option<i32>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
