use time::macros::date;

use super::*;

fn booking(from: &str, to: &str) -> Booking {
    Booking { id: "b".to_owned(), date_from: from.to_owned(), date_to: to.to_owned(), guests: 1, ..Booking::default() }
}

fn june_booking() -> Vec<BookedRange> {
    booked_ranges(&[booking("2024-06-10T00:00:00.000Z", "2024-06-15T00:00:00.000Z")])
}

const TODAY: Date = date!(2024 - 06 - 01);

// =============================================================
// Parsing & ranges
// =============================================================

#[test]
fn parse_api_date_reads_timestamp_prefix() {
    assert_eq!(parse_api_date("2024-06-10T00:00:00.000Z"), Some(date!(2024 - 06 - 10)));
    assert_eq!(parse_api_date("2024-06-10"), Some(date!(2024 - 06 - 10)));
    assert_eq!(parse_api_date("10/06/2024"), None);
    assert_eq!(parse_api_date("2024"), None);
}

#[test]
fn unparsable_bookings_are_skipped() {
    let ranges = booked_ranges(&[booking("garbage", "2024-06-15"), booking("2024-07-01", "2024-07-03")]);
    assert_eq!(ranges, vec![BookedRange { start: date!(2024 - 07 - 01), end: date!(2024 - 07 - 03) }]);
}

#[test]
fn blocked_days_include_both_ends() {
    let ranges = june_booking();
    assert!(is_blocked(date!(2024 - 06 - 10), &ranges));
    assert!(is_blocked(date!(2024 - 06 - 12), &ranges));
    assert!(is_blocked(date!(2024 - 06 - 15), &ranges));
    assert!(!is_blocked(date!(2024 - 06 - 09), &ranges));
    assert!(!is_blocked(date!(2024 - 06 - 16), &ranges));
}

// =============================================================
// Picking
// =============================================================

#[test]
fn start_inside_booked_range_is_rejected() {
    let mut selection = RangeSelection::default();
    let result = selection.pick(date!(2024 - 06 - 12), TODAY, &june_booking());
    assert_eq!(result, Err(SelectionError::Booked(date!(2024 - 06 - 12))));
    assert_eq!(selection, RangeSelection::default());
}

#[test]
fn past_days_are_rejected() {
    let mut selection = RangeSelection::default();
    let result = selection.pick(date!(2024 - 05 - 31), TODAY, &[]);
    assert_eq!(result, Err(SelectionError::Past(date!(2024 - 05 - 31))));
}

#[test]
fn today_is_selectable() {
    assert!(check_selectable(TODAY, TODAY, &[]).is_ok());
}

#[test]
fn blocked_end_is_rejected_and_keeps_start() {
    let ranges = june_booking();
    let mut selection = RangeSelection::default();
    selection.pick(date!(2024 - 06 - 05), TODAY, &ranges).expect("start");
    assert!(selection.pick(date!(2024 - 06 - 11), TODAY, &ranges).is_err());
    assert_eq!(selection.start(), Some(date!(2024 - 06 - 05)));
    assert_eq!(selection.end(), None);
}

#[test]
fn range_spanning_a_booking_is_not_checked_inside() {
    let ranges = june_booking();
    let mut selection = RangeSelection::default();
    selection.pick(date!(2024 - 06 - 08), TODAY, &ranges).expect("start");
    selection.pick(date!(2024 - 06 - 20), TODAY, &ranges).expect("end");
    assert_eq!(selection.dates(), Some((date!(2024 - 06 - 08), date!(2024 - 06 - 20))));
}

#[test]
fn click_before_start_restarts_range() {
    let mut selection = RangeSelection::default();
    selection.pick(date!(2024 - 06 - 20), TODAY, &[]).expect("start");
    selection.pick(date!(2024 - 06 - 18), TODAY, &[]).expect("restart");
    assert_eq!(selection.start(), Some(date!(2024 - 06 - 18)));
    assert_eq!(selection.end(), None);
}

#[test]
fn third_click_starts_new_range() {
    let mut selection = RangeSelection::default();
    selection.pick(date!(2024 - 06 - 02), TODAY, &[]).expect("start");
    selection.pick(date!(2024 - 06 - 04), TODAY, &[]).expect("end");
    selection.pick(date!(2024 - 06 - 07), TODAY, &[]).expect("new start");
    assert_eq!(selection.start(), Some(date!(2024 - 06 - 07)));
    assert_eq!(selection.end(), None);
}

#[test]
fn same_day_range_is_allowed() {
    let mut selection = RangeSelection::default();
    selection.pick(date!(2024 - 06 - 02), TODAY, &[]).expect("start");
    selection.pick(date!(2024 - 06 - 02), TODAY, &[]).expect("end");
    assert_eq!(selection.nights(), Some(0));
}

#[test]
fn nights_and_coverage() {
    let mut selection = RangeSelection::default();
    assert_eq!(selection.nights(), None);
    selection.pick(date!(2024 - 06 - 02), TODAY, &[]).expect("start");
    assert!(selection.covers(date!(2024 - 06 - 02)));
    assert!(!selection.covers(date!(2024 - 06 - 03)));
    selection.pick(date!(2024 - 06 - 05), TODAY, &[]).expect("end");
    assert_eq!(selection.nights(), Some(3));
    assert!(selection.covers(date!(2024 - 06 - 03)));
    selection.clear();
    assert_eq!(selection.start(), None);
}
