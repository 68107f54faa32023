//! Booked date ranges and the range picker's acceptance rule.
//!
//! SYSTEM CONTEXT
//! ==============
//! The venue page feeds embedded bookings through [`booked_ranges`] and asks
//! [`RangeSelection::pick`] whether each clicked day may become an endpoint.
//! A day is rejected when it lies before today or inside any booked range
//! (both ends inclusive). Only the picked endpoints are checked; a range may
//! still span a booked stretch between them.

#[cfg(test)]
#[path = "availability_test.rs"]
mod availability_test;

use api::Booking;
use time::Date;
use time::macros::format_description;

/// Calendar date of an API timestamp such as `2024-06-10T00:00:00.000Z`.
///
/// Only the leading `YYYY-MM-DD` is read, so bare dates parse too.
#[must_use]
pub fn parse_api_date(raw: &str) -> Option<Date> {
    let day = raw.trim().get(..10)?;
    Date::parse(day, format_description!("[year]-[month]-[day]")).ok()
}

/// Inclusive span of days taken by one booking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BookedRange {
    pub start: Date,
    pub end: Date,
}

impl BookedRange {
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Ranges for every booking whose dates parse; others are skipped.
#[must_use]
pub fn booked_ranges(bookings: &[Booking]) -> Vec<BookedRange> {
    bookings
        .iter()
        .filter_map(|b| {
            let start = parse_api_date(&b.date_from)?;
            let end = parse_api_date(&b.date_to)?;
            Some(BookedRange { start, end })
        })
        .collect()
}

/// Whether `date` falls inside any booked range.
#[must_use]
pub fn is_blocked(date: Date, ranges: &[BookedRange]) -> bool {
    ranges.iter().any(|r| r.contains(date))
}

/// Why a day cannot be picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("{0} is in the past")]
    Past(Date),
    #[error("{0} is already booked")]
    Booked(Date),
}

/// Picker filter predicate: `Ok` when `date` may be an endpoint.
///
/// # Errors
///
/// [`SelectionError::Past`] before `today`, [`SelectionError::Booked`] inside a
/// booked range.
pub fn check_selectable(date: Date, today: Date, ranges: &[BookedRange]) -> Result<(), SelectionError> {
    if date < today {
        return Err(SelectionError::Past(date));
    }
    if is_blocked(date, ranges) {
        return Err(SelectionError::Booked(date));
    }
    Ok(())
}

/// Two-click range picker state.
///
/// The first accepted click sets the start. A second click on or after the
/// start sets the end; a click before it restarts the range. Clicking again
/// once both ends are set starts a new range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RangeSelection {
    start: Option<Date>,
    end: Option<Date>,
}

impl RangeSelection {
    #[must_use]
    pub fn start(&self) -> Option<Date> {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Option<Date> {
        self.end
    }

    /// Both endpoints chosen.
    #[must_use]
    pub fn dates(&self) -> Option<(Date, Date)> {
        Some((self.start?, self.end?))
    }

    /// Apply a click on `date`. Rejected clicks leave the selection unchanged.
    ///
    /// # Errors
    ///
    /// Propagates [`check_selectable`] failures.
    pub fn pick(&mut self, date: Date, today: Date, ranges: &[BookedRange]) -> Result<(), SelectionError> {
        check_selectable(date, today, ranges)?;
        match (self.start, self.end) {
            (Some(start), None) if date >= start => self.end = Some(date),
            _ => {
                self.start = Some(date);
                self.end = None;
            }
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Nights between the endpoints once both are set.
    #[must_use]
    pub fn nights(&self) -> Option<i64> {
        let (start, end) = self.dates()?;
        Some((end - start).whole_days())
    }

    /// Whether `date` lies within the current selection, for highlighting.
    #[must_use]
    pub fn covers(&self, date: Date) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            (Some(start), None) => start == date,
            _ => false,
        }
    }
}
