use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::common::default_limit;
use super::cryatlon::CryatlonResponse;
use super::member::validate_gender;
use super::race::RaceResponse;
use super::relay::RelayResponse;
use crate::models::{Cryatlon, Order, Race, Relay};

/// Query filter for the admin order listing.
#[derive(Debug, Deserialize, IntoParams)]
pub struct OrderFilter {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    pub competition_id: Option<i32>,
    pub status: Option<String>,
    pub processed: Option<bool>,
}

/// Public entry form. Activity ids that cannot be resolved within the
/// competition are dropped, not rejected; `None` for all three activity
/// fields is the only hard error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    pub competition_id: i32,

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

    #[validate(length(min = 1, max = 255, message = "Club name is required"))]
    pub club_name: String,

    #[validate(length(max = 255))]
    pub location: Option<String>,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 32))]
    pub phone: String,

    pub races: Option<Vec<i32>>,
    pub relays: Option<Vec<i32>>,
    pub cryathlon_id: Option<i32>,

    #[validate(length(max = 2000))]
    pub additional: Option<String>,
}

impl CreateOrderRequest {
    /// An order must name at least one activity. A supplied-but-empty list
    /// still counts as named: the ids inside are resolved best-effort later.
    pub fn names_activities(&self) -> bool {
        self.races.is_some() || self.relays.is_some() || self.cryathlon_id.is_some()
    }
}

/// Admin status/processed update. Both fields optional; omitted fields are
/// left untouched.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderRequest {
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
    pub processed: Option<bool>,
}

fn validate_status(status: &str) -> Result<(), validator::ValidationError> {
    status
        .parse::<crate::models::OrderStatus>()
        .map(|_| ())
        .map_err(|_| validator::ValidationError::new("invalid_status"))
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: i32,
    pub competition_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub birthdate: NaiveDate,
    pub gender: String,
    pub club_name: String,
    pub location: Option<String>,
    pub email: String,
    pub phone: String,
    pub races: Vec<RaceResponse>,
    pub relays: Vec<RelayResponse>,
    pub cryathlon: Option<CryatlonResponse>,
    pub additional: Option<String>,
    pub status: String,
    pub processed: bool,
    pub created_at: NaiveDateTime,
}

impl OrderResponse {
    /// Joins the order row with its resolved activities. The activities are
    /// loaded by the service layer; this is pure reshaping.
    pub fn from_parts(
        order: Order,
        races: Vec<Race>,
        relays: Vec<Relay>,
        cryathlon: Option<Cryatlon>,
    ) -> Self {
        Self {
            id: order.id,
            competition_id: order.competition_id,
            first_name: order.first_name,
            last_name: order.last_name,
            middle_name: order.middle_name,
            birthdate: order.birthdate,
            gender: order.gender,
            club_name: order.club_name,
            location: order.location,
            email: order.email,
            phone: order.phone,
            races: races.into_iter().map(RaceResponse::from).collect(),
            relays: relays.into_iter().map(RelayResponse::from).collect(),
            cryathlon: cryathlon.map(CryatlonResponse::from),
            additional: order.additional,
            status: order.status,
            processed: order.processed,
            created_at: order.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateOrderRequest {
        CreateOrderRequest {
            competition_id: 1,
            first_name: "Olha".into(),
            last_name: "Bondar".into(),
            middle_name: None,
            birthdate: NaiveDate::from_ymd_opt(1995, 3, 2).unwrap(),
            gender: "female".into(),
            club_name: "Dolphin".into(),
            location: Some("Lviv".into()),
            email: "olha@example.com".into(),
            phone: "+380501234567".into(),
            races: None,
            relays: None,
            cryathlon_id: None,
            additional: None,
        }
    }

    #[test]
    fn no_activity_fields_means_no_activities() {
        assert!(!request().names_activities());
    }

    #[test]
    fn any_activity_field_counts() {
        let mut req = request();
        req.races = Some(vec![1, 2]);
        assert!(req.names_activities());

        let mut req = request();
        req.relays = Some(vec![]);
        // A supplied empty list counts as named; resolution decides later.
        assert!(req.names_activities());

        let mut req = request();
        req.cryathlon_id = Some(9);
        assert!(req.names_activities());
    }

    #[test]
    fn status_update_accepts_known_statuses_only() {
        let ok = UpdateOrderRequest {
            status: Some("rejected".into()),
            processed: None,
        };
        assert!(ok.validate().is_ok());

        let bad = UpdateOrderRequest {
            status: Some("archived".into()),
            processed: None,
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn response_joins_order_and_activities() {
        let order = Order {
            id: 11,
            competition_id: 4,
            first_name: "Olha".into(),
            last_name: "Bondar".into(),
            middle_name: None,
            birthdate: NaiveDate::from_ymd_opt(1995, 3, 2).unwrap(),
            gender: "female".into(),
            club_name: "Dolphin".into(),
            location: None,
            email: "olha@example.com".into(),
            phone: "+380501234567".into(),
            cryathlon_id: None,
            additional: None,
            status: "new".into(),
            processed: false,
            created_at: NaiveDateTime::default(),
        };
        let race = Race {
            id: 2,
            competition_id: 4,
            distance_m: 100,
            style: "freestyle".into(),
            gender: None,
            description: None,
        };

        let response = OrderResponse::from_parts(order, vec![race], vec![], None);
        assert_eq!(response.races.len(), 1);
        assert_eq!(response.races[0].competition_id, 4);
        assert!(response.relays.is_empty());
        assert!(response.cryathlon.is_none());
        assert_eq!(response.status, "new");
        assert!(!response.processed);
    }
}
