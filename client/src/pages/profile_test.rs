use super::*;

#[test]
fn loading_wins_over_everything() {
    assert_eq!(bookings_view(true, Some("boom".into()), 3), BookingsView::Loading);
}

#[test]
fn failed_fetch_is_not_reported_as_no_bookings() {
    assert_eq!(
        bookings_view(false, Some("Something went wrong. Please try again.".into()), 0),
        BookingsView::Failed("Something went wrong. Please try again.".into())
    );
}

#[test]
fn empty_and_filled_lists() {
    assert_eq!(bookings_view(false, None, 0), BookingsView::Empty);
    assert_eq!(bookings_view(false, None, 2), BookingsView::List);
}
