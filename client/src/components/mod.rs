//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome (navbar, footer, toasts) and the venue
//! building blocks shared by several pages. They read session and toast state
//! from Leptos context providers and report user actions through callbacks.

pub mod date_range_picker;
pub mod footer;
pub mod gallery;
pub mod navbar;
pub mod promo_banner;
pub mod review_quote;
pub mod toast_host;
pub mod venue_card;
pub mod venue_form;
