pub mod repository;

pub use repository::{BookingDecision, ReservationRepository};

use railbook_core::BookingStatus;
use railbook_store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ReservationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Booking not found: {0}")]
    BookingNotFound(String),

    #[error("Invalid status transition from {from:?} to {to:?}")]
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },
}

pub type ReservationResult<T> = Result<T, ReservationError>;
