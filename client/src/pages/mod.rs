//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, guards, navigation)
//! and delegates rendering details to `components`.

pub mod booking_confirmation;
pub mod create_venue;
pub mod dashboard;
pub mod edit_profile;
pub mod edit_venue;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod venue_detail;
pub mod venues;
