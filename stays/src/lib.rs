//! Stay rules shared by the browser client and the CLI.
//!
//! Pure functions over [`api`] types: listing filters and sort orders, booked
//! date ranges and range picking, booking preparation, and dashboard ordering.
//! Nothing here performs I/O or reads the clock; callers pass "today" in.

pub mod availability;
pub mod booking;
pub mod dashboard;
pub mod listing;

pub use availability::{BookedRange, RangeSelection, SelectionError, booked_ranges, is_blocked, parse_api_date};
pub use booking::{Booker, BookingError, format_api_date, is_own_venue, prepare_booking};
pub use listing::{SortMode, refine};
