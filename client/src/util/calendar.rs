//! Month grid for the availability calendar.
//!
//! DESIGN
//! ======
//! Weeks start on Monday. [`MonthView::cells`] pads the first week with
//! `None` so the grid can be rendered row by row without date math in views.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use time::macros::format_description;
use time::{Date, Month};

pub const WEEKDAY_LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Today's date in the browser's local time zone (UTC natively).
pub fn today() -> Date {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        let month = u8::try_from(now.get_month() + 1).ok().and_then(|m| Month::try_from(m).ok());
        let day = u8::try_from(now.get_date()).ok();
        let year = i32::try_from(now.get_full_year()).unwrap_or(1970);
        if let (Some(month), Some(day)) = (month, day) {
            if let Ok(date) = Date::from_calendar_date(year, month, day) {
                return date;
            }
        }
        time::OffsetDateTime::now_utc().date()
    }
    #[cfg(not(feature = "csr"))]
    {
        time::OffsetDateTime::now_utc().date()
    }
}

/// One calendar month.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    pub month: Month,
}

impl MonthView {
    pub fn containing(date: Date) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    pub fn next(self) -> Self {
        let year = if self.month == Month::December { self.year + 1 } else { self.year };
        Self { year, month: self.month.next() }
    }

    pub fn previous(self) -> Self {
        let year = if self.month == Month::January { self.year - 1 } else { self.year };
        Self { year, month: self.month.previous() }
    }

    /// `June 2024`
    pub fn title(self) -> String {
        Date::from_calendar_date(self.year, self.month, 1)
            .ok()
            .and_then(|first| first.format(format_description!("[month repr:long] [year]")).ok())
            .unwrap_or_default()
    }

    /// Leading blanks for the first week, then every day of the month.
    pub fn cells(self) -> Vec<Option<Date>> {
        let Ok(first) = Date::from_calendar_date(self.year, self.month, 1) else {
            return Vec::new();
        };
        let offset = usize::from(first.weekday().number_days_from_monday());
        let days = self.month.length(self.year);
        let mut cells = vec![None; offset];
        cells.extend((1..=days).map(|day| Date::from_calendar_date(self.year, self.month, day).ok()));
        cells
    }

    /// Whether this month ends before `date`'s month starts.
    pub fn is_before_month_of(self, date: Date) -> bool {
        (self.year, u8::from(self.month)) < (date.year(), u8::from(date.month()))
    }
}
