use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MAX_PAGE_SIZE: u32 = 100;

pub fn default_limit() -> u32 {
    20
}

/// Sort direction accepted by the listing endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Validates the shared limit/offset pair carried by every filter DTO.
pub fn validate_page(limit: u32) -> Result<(), String> {
    if limit < 1 || limit > MAX_PAGE_SIZE {
        return Err(format!("limit must be between 1 and {}", MAX_PAGE_SIZE));
    }
    Ok(())
}

/// Envelope for paged listings: the page of data plus the total matching
/// count, echoing the limit/offset the page was produced with.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub limit: u32,
    pub offset: u32,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>, total: i64, limit: u32, offset: u32) -> Self {
        Self {
            data,
            total,
            limit,
            offset,
        }
    }
}

/// Envelope for single-entity responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Public-safe view of an entrant shown in activity listings: name and club
/// only, no contact details.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct EntrantInfo {
    #[serde(skip)]
    pub activity_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub club_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_limits_are_bounded() {
        assert!(validate_page(1).is_ok());
        assert!(validate_page(MAX_PAGE_SIZE).is_ok());
        assert!(validate_page(0).is_err());
        assert!(validate_page(MAX_PAGE_SIZE + 1).is_err());
    }

    #[test]
    fn entrant_serialization_hides_activity_id() {
        let entrant = EntrantInfo {
            activity_id: 7,
            first_name: "Anna".into(),
            last_name: "Koval".into(),
            club_name: "Wave".into(),
        };
        let json = serde_json::to_value(&entrant).unwrap();
        assert!(json.get("activity_id").is_none());
        assert_eq!(json["club_name"], "Wave");
    }
}
