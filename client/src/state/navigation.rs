//! State handed from one page to the next.
//!
//! Lives in context signals only, so it is gone after a reload. Pages that
//! depend on it redirect when it is missing.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use api::{Booking, Venue};
use stays::parse_api_date;
use time::Date;

/// A booking just created, shown on the confirmation page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingReceipt {
    pub booking_id: String,
    pub venue_id: String,
    pub venue_name: String,
    pub date_from: Date,
    pub date_to: Date,
    pub guests: u32,
}

impl BookingReceipt {
    /// Build from the create-booking response. `None` if its dates do not
    /// parse.
    pub fn from_booking(booking: &Booking, venue: &Venue) -> Option<Self> {
        Some(Self {
            booking_id: booking.id.clone(),
            venue_id: venue.id.clone(),
            venue_name: venue.name.clone(),
            date_from: parse_api_date(&booking.date_from)?,
            date_to: parse_api_date(&booking.date_to)?,
            guests: booking.guests,
        })
    }

    pub fn nights(&self) -> i64 {
        (self.date_to - self.date_from).whole_days()
    }
}

/// One-shot banner for the page a form redirects to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flash {
    ProfileUpdated,
    VenueCreated,
    VenueUpdated,
}

impl Flash {
    pub fn message(self) -> &'static str {
        match self {
            Self::ProfileUpdated => "Profile updated successfully!",
            Self::VenueCreated => "Venue created!",
            Self::VenueUpdated => "Venue updated successfully!",
        }
    }
}
