//! Ordering and list edits for the manager dashboard.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use api::{Booking, Venue};

/// Sort bookings by `dateFrom`, earliest first.
///
/// Plain string comparison is enough because the API always sends fixed-width
/// ISO-8601 UTC timestamps.
pub fn sort_by_start(bookings: &mut [Booking]) {
    bookings.sort_by(|a, b| a.date_from.cmp(&b.date_from));
}

/// Drop the venue with `id`; returns whether anything was removed.
pub fn remove_venue(venues: &mut Vec<Venue>, id: &str) -> bool {
    let before = venues.len();
    venues.retain(|v| v.id != id);
    venues.len() != before
}
