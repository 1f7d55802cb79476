use std::sync::Arc;

use railbook_core::{Booking, BookingStatus, Passenger};
use railbook_reservations::{BookingDecision, ReservationRepository};
use railbook_session::SessionManager;
use railbook_store::{JsonFileStore, TicketStore};

fn open_store(dir: &std::path::Path) -> TicketStore {
    let backend = JsonFileStore::new(dir).unwrap();
    let store = TicketStore::new(Arc::new(backend));
    store.initialize().unwrap();
    store
}

#[test]
fn full_reservation_flow_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    // First "browser session": a traveler signs up and books a trip.
    let traveler_id = {
        let session = SessionManager::new(ReservationRepository::new(open_store(dir.path())));

        let alice = session.signup("alice", "pw1").unwrap();
        let route = session.repository().route("route2").unwrap().unwrap();
        assert_eq!(route.origin, "Boston");

        let booking = Booking::new(
            alice.id.clone(),
            route.id.clone(),
            vec![Passenger {
                name: "Bo".to_string(),
                age: 30,
                seat_number: None,
            }],
        );
        session.repository().save_booking(&booking).unwrap();
        alice.id
    };

    // Second session, same store: the session pointer and booking persisted.
    {
        let session = SessionManager::new(ReservationRepository::new(open_store(dir.path())));
        assert!(session.is_authenticated().unwrap());
        assert_eq!(session.current_user().unwrap().unwrap().id, traveler_id);

        // The admin takes over and approves the pending booking.
        session.logout().unwrap();
        session.login("admin", "admin123").unwrap().unwrap();
        assert!(session.is_admin().unwrap());

        let queue = session
            .repository()
            .pending_bookings_with_route_details()
            .unwrap();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].route.as_ref().unwrap().id, "route2");

        session
            .repository()
            .update_booking_status(&queue[0].id, BookingDecision::Approved)
            .unwrap();
    }

    // Third session: the traveler sees the approved booking with its route.
    {
        let session = SessionManager::new(ReservationRepository::new(open_store(dir.path())));
        session.login("alice", "pw1").unwrap().unwrap();

        let mine = session
            .repository()
            .user_bookings_with_route_details(&traveler_id)
            .unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].status, BookingStatus::Approved);
        assert_eq!(mine[0].route.as_ref().unwrap().destination, "New York");

        assert!(session
            .repository()
            .pending_bookings_with_route_details()
            .unwrap()
            .is_empty());
    }
}
