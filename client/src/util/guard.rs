//! Route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Manager pages (dashboard, create, edit) must redirect before issuing any
//! request. The decision is a pure function of the session so it can be
//! tested without a router.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::Session;

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Allowed,
    Redirect(&'static str),
}

/// Managers pass; customers go to their profile, visitors to login.
pub fn manager_access(session: Option<&Session>) -> Access {
    match session {
        None => Access::Redirect("/login"),
        Some(session) if !session.is_manager() => Access::Redirect("/profile"),
        Some(_) => Access::Allowed,
    }
}

/// Redirect away whenever the session stops granting manager access.
pub fn install_manager_guard<F>(session: RwSignal<Option<Session>>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Access::Redirect(path) = session.with(|current| manager_access(current.as_ref())) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
