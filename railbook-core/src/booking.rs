use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::route::Route;

/// Booking status in the lifecycle: created pending, then approved or
/// rejected by an administrator, exactly once.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
}

impl BookingStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, BookingStatus::Pending)
    }
}

/// Travel class selected for a booking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TravelClass {
    First,
    Second,
    Third,
}

/// A named traveler embedded in a booking. No identity of its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    pub name: String,
    pub age: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat_number: Option<String>,
}

/// A user's reservation against one route for one or more passengers,
/// subject to admin approval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub route_id: String,
    pub passengers: Vec<Passenger>,
    pub status: BookingStatus,
    pub booking_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_type: Option<TravelClass>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Denormalized route, populated only by the route-join queries.
    /// Stored booking rows never carry it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<Route>,
}

impl Booking {
    /// Build a pending booking with a fresh id, stamped with the current time.
    pub fn new(
        user_id: impl Into<String>,
        route_id: impl Into<String>,
        passengers: Vec<Passenger>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            route_id: route_id.into(),
            passengers,
            status: BookingStatus::Pending,
            booking_date: Utc::now(),
            class_type: None,
            date: None,
            route: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_booking_starts_pending() {
        let booking = Booking::new(
            "u1",
            "route2",
            vec![Passenger {
                name: "Bo".to_string(),
                age: 30,
                seat_number: None,
            }],
        );

        assert!(booking.is_pending());
        assert!(booking.route.is_none());
        assert!(!booking.id.is_empty());
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&BookingStatus::Approved).unwrap(),
            "\"approved\""
        );
        assert_eq!(
            serde_json::to_string(&TravelClass::Second).unwrap(),
            "\"second\""
        );
    }

    #[test]
    fn stored_layout_uses_camel_case_and_omits_route() {
        let booking = Booking::new("u1", "route1", vec![]);
        let value = serde_json::to_value(&booking).unwrap();
        let object = value.as_object().unwrap();

        assert!(object.contains_key("userId"));
        assert!(object.contains_key("routeId"));
        assert!(object.contains_key("bookingDate"));
        assert!(!object.contains_key("route"));
        assert!(!object.contains_key("classType"));
    }

    #[test]
    fn deserializes_rows_written_by_older_clients() {
        let raw = r#"{
            "id": "1714938123456",
            "userId": "admin1",
            "routeId": "route3",
            "passengers": [{"name": "Ada", "age": 36, "seatNumber": "12A"}],
            "status": "approved",
            "bookingDate": "2024-05-05T19:42:03.456Z"
        }"#;

        let booking: Booking = serde_json::from_str(raw).unwrap();
        assert_eq!(booking.status, BookingStatus::Approved);
        assert_eq!(booking.passengers[0].seat_number.as_deref(), Some("12A"));
        assert!(booking.route.is_none());
        assert!(booking.date.is_none());
    }
}
