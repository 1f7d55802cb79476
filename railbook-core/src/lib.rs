pub mod booking;
pub mod route;
pub mod user;

pub use booking::{Booking, BookingStatus, Passenger, TravelClass};
pub use route::Route;
pub use user::User;
