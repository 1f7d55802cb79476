use serde::{Deserialize, Serialize};

/// A fixed origin/destination offering with schedule and price.
///
/// Routes are seeded reference data and immutable thereafter; bookings refer
/// to them by id but never own them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: String,
    #[serde(rename = "from")]
    pub origin: String,
    #[serde(rename = "to")]
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub price: f64,
}
