use super::*;
use api::Booking;
use stays::booked_ranges;
use time::macros::date;

fn june_booking() -> Vec<BookedRange> {
    booked_ranges(&[Booking {
        id: "b".into(),
        date_from: "2024-06-10T00:00:00.000Z".into(),
        date_to: "2024-06-15T00:00:00.000Z".into(),
        guests: 2,
        ..Booking::default()
    }])
}

#[test]
fn days_inside_booking_render_booked() {
    let ranges = june_booking();
    let today = date!(2024 - 06 - 01);
    let none = RangeSelection::default();
    assert_eq!(day_state(date!(2024 - 06 - 10), today, &ranges, &none), DayState::Booked);
    assert_eq!(day_state(date!(2024 - 06 - 12), today, &ranges, &none), DayState::Booked);
    assert_eq!(day_state(date!(2024 - 06 - 15), today, &ranges, &none), DayState::Booked);
    assert_eq!(day_state(date!(2024 - 06 - 16), today, &ranges, &none), DayState::Available);
}

#[test]
fn past_days_render_past_and_disabled() {
    let state = day_state(date!(2024 - 05 - 31), date!(2024 - 06 - 01), &[], &RangeSelection::default());
    assert_eq!(state, DayState::Past);
    assert!(state.is_disabled());
}

#[test]
fn selected_range_is_highlighted() {
    let today = date!(2024 - 06 - 01);
    let mut selection = RangeSelection::default();
    selection.pick(date!(2024 - 06 - 02), today, &[]).unwrap();
    selection.pick(date!(2024 - 06 - 04), today, &[]).unwrap();
    assert_eq!(day_state(date!(2024 - 06 - 03), today, &[], &selection), DayState::Selected);
    assert_eq!(day_state(date!(2024 - 06 - 05), today, &[], &selection), DayState::Available);
}

#[test]
fn rejection_messages_name_the_reason() {
    assert!(rejection_message(SelectionError::Past(date!(2024 - 01 - 01))).contains("past"));
    assert!(rejection_message(SelectionError::Booked(date!(2024 - 01 - 01))).contains("booked"));
}
