//! Turning a picked range into a create-booking payload.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use api::{NewBooking, Role, Venue};
use time::Date;

use crate::availability::RangeSelection;

/// The signed-in user attempting a booking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Booker<'a> {
    pub token: &'a str,
    pub name: &'a str,
    pub role: Role,
}

/// Reasons a booking is refused before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("You must log in before booking.")]
    NotLoggedIn,
    #[error("You manage this venue and cannot book it yourself.")]
    OwnVenue,
    #[error("Please choose both a start and an end date.")]
    MissingDates,
    #[error("Please choose at least one guest.")]
    NoGuests,
    #[error("This venue hosts at most {max} guests.")]
    TooManyGuests { max: u32 },
}

/// A manager looking at a venue they own.
#[must_use]
pub fn is_own_venue(role: Role, user_name: &str, venue: &Venue) -> bool {
    role.is_manager() && venue.owner.as_ref().is_some_and(|owner| owner.name == user_name)
}

/// API timestamp for a calendar day at midnight UTC.
#[must_use]
pub fn format_api_date(date: Date) -> String {
    format!("{date}T00:00:00.000Z")
}

/// Validate a booking attempt and build its request body.
///
/// # Errors
///
/// Returns the first [`BookingError`] that applies, checked in order: no
/// session, own venue, incomplete dates, guest count.
pub fn prepare_booking(
    booker: Option<Booker<'_>>,
    venue: &Venue,
    selection: &RangeSelection,
    guests: u32,
) -> Result<NewBooking, BookingError> {
    let booker = booker.filter(|b| !b.token.is_empty()).ok_or(BookingError::NotLoggedIn)?;
    if is_own_venue(booker.role, booker.name, venue) {
        return Err(BookingError::OwnVenue);
    }
    let (start, end) = selection.dates().ok_or(BookingError::MissingDates)?;
    if guests == 0 {
        return Err(BookingError::NoGuests);
    }
    if let Some(max) = venue.max_guests.filter(|max| guests > *max) {
        return Err(BookingError::TooManyGuests { max });
    }
    Ok(NewBooking {
        date_from: format_api_date(start),
        date_to: format_api_date(end),
        guests,
        venue_id: venue.id.clone(),
    })
}
