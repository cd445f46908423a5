use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::common::{SortDirection, default_limit};

/// Query filter for the member listing.
#[derive(Debug, Deserialize, IntoParams)]
pub struct MemberFilter {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    pub sort: Option<String>,
    pub direction: Option<SortDirection>,
    pub club_id: Option<i32>,
    pub gender: Option<String>,
    /// Minimum age in full years, computed against the birthdate.
    pub min_age: Option<i32>,
    /// Maximum age in full years, computed against the birthdate.
    pub max_age: Option<i32>,
    /// Free-text search over first/middle/last name.
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMemberRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "First name must be between 1 and 255 characters"
    ))]
    pub first_name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Last name must be between 1 and 255 characters"
    ))]
    pub last_name: String,

    #[validate(length(max = 255))]
    pub middle_name: Option<String>,

    pub birthdate: NaiveDate,

    #[validate(custom(function = "validate_gender"))]
    pub gender: String,

    #[serde(default)]
    pub para_swimmer: bool,

    pub club_id: Option<i32>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(max = 32))]
    pub phone: Option<String>,

    #[validate(length(max = 255))]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MemberResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub birthdate: NaiveDate,
    pub gender: String,
    pub para_swimmer: bool,
    pub club_id: Option<i32>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<crate::models::Member> for MemberResponse {
    fn from(member: crate::models::Member) -> Self {
        Self {
            id: member.id,
            first_name: member.first_name,
            last_name: member.last_name,
            middle_name: member.middle_name,
            birthdate: member.birthdate,
            gender: member.gender,
            para_swimmer: member.para_swimmer,
            club_id: member.club_id,
            email: member.email,
            phone: member.phone,
            location: member.location,
            created_at: member.created_at,
        }
    }
}

// Validation helper
pub fn validate_gender(gender: &str) -> Result<(), validator::ValidationError> {
    const VALID_GENDERS: &[&str] = &["male", "female"];

    if VALID_GENDERS.contains(&gender) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_gender"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateMemberRequest {
        CreateMemberRequest {
            first_name: "Ivan".into(),
            last_name: "Petrov".into(),
            middle_name: None,
            birthdate: NaiveDate::from_ymd_opt(1990, 5, 14).unwrap(),
            gender: "male".into(),
            para_swimmer: false,
            club_id: Some(1),
            email: Some("ivan@example.com".into()),
            phone: None,
            location: None,
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn unknown_gender_fails_validation() {
        let mut req = request();
        req.gender = "other".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn malformed_email_fails_validation() {
        let mut req = request();
        req.email = Some("not-an-email".into());
        assert!(req.validate().is_err());
    }

    #[test]
    fn response_mirrors_model() {
        let member = crate::models::Member {
            id: 3,
            first_name: "Ivan".into(),
            last_name: "Petrov".into(),
            middle_name: None,
            birthdate: NaiveDate::from_ymd_opt(1990, 5, 14).unwrap(),
            gender: "male".into(),
            para_swimmer: true,
            club_id: None,
            email: None,
            phone: None,
            location: Some("Kyiv".into()),
            created_at: chrono::NaiveDateTime::default(),
        };
        let response = MemberResponse::from(member);
        assert_eq!(response.id, 3);
        assert!(response.para_swimmer);
        assert_eq!(response.location.as_deref(), Some("Kyiv"));
    }
}
