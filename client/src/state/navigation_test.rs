use super::*;
use time::macros::date;

fn booking(from: &str, to: &str) -> Booking {
    Booking { id: "b-1".into(), date_from: from.into(), date_to: to.into(), guests: 2, ..Booking::default() }
}

fn venue() -> Venue {
    Venue { id: "v-9".into(), name: "Fjord Cabin".into(), ..Venue::default() }
}

#[test]
fn receipt_carries_ids_and_dates() {
    let receipt =
        BookingReceipt::from_booking(&booking("2024-06-10T00:00:00.000Z", "2024-06-13T00:00:00.000Z"), &venue())
            .unwrap();
    assert_eq!(receipt.booking_id, "b-1");
    assert_eq!(receipt.venue_id, "v-9");
    assert_eq!(receipt.venue_name, "Fjord Cabin");
    assert_eq!(receipt.date_from, date!(2024 - 06 - 10));
    assert_eq!(receipt.nights(), 3);
    assert_eq!(receipt.guests, 2);
}

#[test]
fn receipt_needs_parseable_dates() {
    assert!(BookingReceipt::from_booking(&booking("soon", "2024-06-13"), &venue()).is_none());
}

#[test]
fn flash_messages_are_distinct() {
    assert_ne!(Flash::ProfileUpdated.message(), Flash::VenueUpdated.message());
}
