use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use railbook_core::{Booking, BookingStatus, Route, User};
use railbook_store::{Collection, TicketStore};

use crate::{ReservationError, ReservationResult};

/// Admin verdict on a pending booking. Pending can never be a target, so a
/// processed booking cannot be flipped back.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingDecision {
    Approved,
    Rejected,
}

impl BookingDecision {
    pub fn status(&self) -> BookingStatus {
        match self {
            BookingDecision::Approved => BookingStatus::Approved,
            BookingDecision::Rejected => BookingStatus::Rejected,
        }
    }
}

/// Typed access and mutation on top of the store: users, routes, bookings,
/// authentication, the approval workflow, and booking↔route joins.
///
/// Reads that miss (`route`, `authenticate_user`) return `Ok(None)`; only
/// storage faults and rejected mutations are errors.
#[derive(Clone)]
pub struct ReservationRepository {
    store: TicketStore,
}

impl ReservationRepository {
    pub fn new(store: TicketStore) -> Self {
        Self { store }
    }

    pub fn users(&self) -> ReservationResult<Vec<User>> {
        Ok(self.store.read(Collection::Users)?)
    }

    /// Append one account and rewrite the collection. Trusts the caller;
    /// username uniqueness is the signup facade's concern.
    pub fn save_user(&self, user: &User) -> ReservationResult<()> {
        let mut users = self.users()?;
        users.push(user.clone());
        self.store.write_all(Collection::Users, &users)?;
        info!(user_id = %user.id, "user saved");
        Ok(())
    }

    /// Linear scan for an exact, case-sensitive match on both fields; the
    /// first match wins. No match is a normal outcome, not an error.
    pub fn authenticate_user(
        &self,
        username: &str,
        password: &str,
    ) -> ReservationResult<Option<User>> {
        let users = self.users()?;
        Ok(users
            .into_iter()
            .find(|user| user.username == username && user.password == password))
    }

    pub fn routes(&self) -> ReservationResult<Vec<Route>> {
        Ok(self.store.read(Collection::Routes)?)
    }

    pub fn route(&self, id: &str) -> ReservationResult<Option<Route>> {
        let routes = self.routes()?;
        Ok(routes.into_iter().find(|route| route.id == id))
    }

    pub fn bookings(&self) -> ReservationResult<Vec<Booking>> {
        Ok(self.store.read(Collection::Bookings)?)
    }

    /// Append one booking and rewrite the collection. The caller supplies a
    /// well-formed value (`Booking::new` stamps id, pending status, and
    /// booking date); passenger and price sanity are not checked here.
    pub fn save_booking(&self, booking: &Booking) -> ReservationResult<()> {
        let mut bookings = self.bookings()?;
        let mut stored = booking.clone();
        // Denormalized join output must never reach the store.
        stored.route = None;
        bookings.push(stored);
        self.store.write_all(Collection::Bookings, &bookings)?;
        info!(booking_id = %booking.id, route_id = %booking.route_id, "booking saved");
        Ok(())
    }

    /// All bookings for one user, in insertion order.
    pub fn user_bookings(&self, user_id: &str) -> ReservationResult<Vec<Booking>> {
        let bookings = self.bookings()?;
        Ok(bookings
            .into_iter()
            .filter(|booking| booking.user_id == user_id)
            .collect())
    }

    /// Apply an admin decision to a pending booking. The only mutation path
    /// for a booking once created: pending goes to approved or rejected
    /// exactly once. An unknown id or an already-processed booking is an
    /// error, never a silent no-op.
    pub fn update_booking_status(
        &self,
        booking_id: &str,
        decision: BookingDecision,
    ) -> ReservationResult<()> {
        let mut bookings = self.bookings()?;
        let booking = bookings
            .iter_mut()
            .find(|booking| booking.id == booking_id)
            .ok_or_else(|| ReservationError::BookingNotFound(booking_id.to_string()))?;

        let to = decision.status();
        if !booking.is_pending() {
            warn!(booking_id, from = ?booking.status, to = ?to, "status transition rejected");
            return Err(ReservationError::InvalidTransition {
                from: booking.status,
                to,
            });
        }
        booking.status = to;

        self.store.write_all(Collection::Bookings, &bookings)?;
        info!(booking_id, status = ?to, "booking status updated");
        Ok(())
    }

    /// Every booking with its route attached by `route_id`. A dangling
    /// `route_id` leaves `route` absent rather than failing the query.
    pub fn all_bookings_with_route_details(&self) -> ReservationResult<Vec<Booking>> {
        let bookings = self.bookings()?;
        self.attach_routes(bookings)
    }

    /// Same join, pre-filtered to one user.
    pub fn user_bookings_with_route_details(
        &self,
        user_id: &str,
    ) -> ReservationResult<Vec<Booking>> {
        let bookings = self.user_bookings(user_id)?;
        self.attach_routes(bookings)
    }

    /// The admin approval queue: pending bookings only, routes attached.
    pub fn pending_bookings_with_route_details(&self) -> ReservationResult<Vec<Booking>> {
        let bookings = self
            .bookings()?
            .into_iter()
            .filter(Booking::is_pending)
            .collect();
        self.attach_routes(bookings)
    }

    pub fn current_user(&self) -> ReservationResult<Option<User>> {
        Ok(self.store.current_user()?)
    }

    pub fn set_current_user(&self, user: Option<&User>) -> ReservationResult<()> {
        Ok(self.store.set_current_user(user)?)
    }

    fn attach_routes(&self, bookings: Vec<Booking>) -> ReservationResult<Vec<Booking>> {
        let routes = self.routes()?;
        Ok(bookings
            .into_iter()
            .map(|mut booking| {
                booking.route = routes.iter().find(|r| r.id == booking.route_id).cloned();
                booking
            })
            .collect())
    }
}
