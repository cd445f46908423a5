use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// An entry submitted for a competition, linking an entrant to the
/// races/relays/cryatlon they signed up for.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Order {
    pub id: i32,
    pub competition_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub birthdate: chrono::NaiveDate,
    pub gender: String,
    pub club_name: String,
    pub location: Option<String>,
    pub email: String,
    pub phone: String,
    pub cryathlon_id: Option<i32>,
    pub additional: Option<String>,
    pub status: String,
    pub processed: bool,
    pub created_at: chrono::NaiveDateTime,
}

/// Insert payload for `OrderRepository::create`. Race/relay ids are already
/// resolved against the competition at this point.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub competition_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub birthdate: chrono::NaiveDate,
    pub gender: String,
    pub club_name: String,
    pub location: Option<String>,
    pub email: String,
    pub phone: String,
    pub race_ids: Vec<i32>,
    pub relay_ids: Vec<i32>,
    pub cryathlon_id: Option<i32>,
    pub additional: Option<String>,
}

/// Lifecycle of an order. `Rejected` is terminal: rejected orders stay out of
/// public entrant listings and cannot be moved to another status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    New,
    Confirmed,
    Rejected,
}

impl OrderStatus {
    pub const REJECTED: &'static str = "rejected";

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Rejected => "rejected",
        }
    }

    /// A rejected order can never leave that state; setting the same status
    /// again is a harmless no-op everywhere.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        match self {
            OrderStatus::Rejected => next == OrderStatus::Rejected,
            _ => true,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(OrderStatus::New),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "rejected" => Ok(OrderStatus::Rejected),
            other => Err(format!("unknown order status: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for status in [OrderStatus::New, OrderStatus::Confirmed, OrderStatus::Rejected] {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!("cancelled".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn rejected_is_terminal() {
        assert!(!OrderStatus::Rejected.can_transition_to(OrderStatus::New));
        assert!(!OrderStatus::Rejected.can_transition_to(OrderStatus::Confirmed));
        assert!(OrderStatus::Rejected.can_transition_to(OrderStatus::Rejected));
    }

    #[test]
    fn live_statuses_can_move() {
        assert!(OrderStatus::New.can_transition_to(OrderStatus::Confirmed));
        assert!(OrderStatus::New.can_transition_to(OrderStatus::Rejected));
        assert!(OrderStatus::Confirmed.can_transition_to(OrderStatus::Rejected));
        assert!(OrderStatus::New.can_transition_to(OrderStatus::New));
    }
}
