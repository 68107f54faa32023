//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is the only state shared across pages. The rest is either
//! page-local (`dashboard`) or short-lived hand-off state provided through
//! context (`navigation`, `toast`).

pub mod dashboard;
pub mod navigation;
pub mod session;
pub mod toast;
