//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and display
//! formatting from page and component logic to improve reuse and testability.

pub mod calendar;
pub mod format;
pub mod guard;
pub mod storage;
