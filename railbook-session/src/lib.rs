pub mod session;

pub use session::SessionManager;

use railbook_reservations::ReservationError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Reservation(#[from] ReservationError),

    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error("Username and password must be non-empty")]
    EmptyCredentials,
}

pub type SessionResult<T> = Result<T, SessionError>;
