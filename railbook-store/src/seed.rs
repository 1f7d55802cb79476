use railbook_core::{Route, User};

/// Fixed reference routes seeded on first run.
pub fn routes() -> Vec<Route> {
    vec![
        Route {
            id: "route1".to_string(),
            origin: "New York".to_string(),
            destination: "Washington DC".to_string(),
            departure_time: "08:00 AM".to_string(),
            arrival_time: "11:30 AM".to_string(),
            price: 89.99,
        },
        Route {
            id: "route2".to_string(),
            origin: "Boston".to_string(),
            destination: "New York".to_string(),
            departure_time: "09:15 AM".to_string(),
            arrival_time: "11:45 AM".to_string(),
            price: 64.99,
        },
        Route {
            id: "route3".to_string(),
            origin: "Philadelphia".to_string(),
            destination: "Boston".to_string(),
            departure_time: "10:30 AM".to_string(),
            arrival_time: "03:15 PM".to_string(),
            price: 95.99,
        },
        Route {
            id: "route4".to_string(),
            origin: "Washington DC".to_string(),
            destination: "Philadelphia".to_string(),
            departure_time: "12:00 PM".to_string(),
            arrival_time: "01:45 PM".to_string(),
            price: 59.99,
        },
    ]
}

/// The one seeded account: an administrator with known credentials.
/// Plaintext by design; see the non-goals on `railbook_core::User`.
pub fn users() -> Vec<User> {
    vec![User {
        id: "admin1".to_string(),
        username: "admin".to_string(),
        password: "admin123".to_string(),
        is_admin: true,
    }]
}
