//! Signed-in session and its change notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar, route guards, booking panel and profile pages all read the
//! current session. Login, logout and profile edits mutate it, and those
//! changes must reach every reader without a page reload.
//!
//! DESIGN
//! ======
//! [`SessionHub`] owns the persisted session (`token`, `user`, `role` keys)
//! and a listener list. Every mutation writes storage first and then emits one
//! [`SessionEvent`]. [`SessionContext`] wraps the hub for Leptos: a listener
//! mirrors the hub into an `RwSignal` so views re-render on change. A
//! `storage` event from another tab maps to [`SessionHub::reload`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use api::{Profile, Role};
use leptos::prelude::*;
use stays::Booker;

use crate::util::storage::{KeyValueStore, load_json, save_json};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const ROLE_KEY: &str = "role";

/// Storage keys that make up a persisted session.
pub const SESSION_KEYS: [&str; 3] = [TOKEN_KEY, USER_KEY, ROLE_KEY];

/// The signed-in user.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: Profile,
    pub role: Role,
}

impl Session {
    pub fn is_manager(&self) -> bool {
        self.role.is_manager()
    }

    pub fn name(&self) -> &str {
        &self.user.name
    }

    /// Identity used when preparing a booking.
    pub fn booker(&self) -> Booker<'_> {
        Booker { token: &self.token, name: &self.user.name, role: self.role }
    }
}

/// Session change notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn { name: String, role: Role },
    SignedOut,
    ProfileUpdated { name: String },
    /// Storage changed underneath the hub (another tab).
    Reloaded,
}

/// Handle returned by [`SessionHub::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subscription(u64);

type Listener = Arc<dyn Fn(&SessionEvent) + Send + Sync>;

/// Persisted session plus change listeners. Clones share state.
#[derive(Clone)]
pub struct SessionHub {
    store: Arc<dyn KeyValueStore>,
    current: Arc<RwLock<Option<Session>>>,
    listeners: Arc<Mutex<Vec<(u64, Listener)>>>,
    next_id: Arc<AtomicU64>,
}

impl std::fmt::Debug for SessionHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionHub").field("current", &self.current()).finish_non_exhaustive()
    }
}

impl SessionHub {
    /// Create a hub over `store`, restoring any persisted session.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let restored = restore(store.as_ref());
        Self {
            store,
            current: Arc::new(RwLock::new(restored)),
            listeners: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.current.read().ok().and_then(|guard| guard.clone())
    }

    /// Persist a login response and notify listeners.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when the response carries no token.
    pub fn sign_in(&self, mut profile: Profile) -> Result<Session, &'static str> {
        let token = profile
            .access_token
            .take()
            .filter(|token| !token.is_empty())
            .ok_or("Login succeeded but no access token was returned.")?;
        let role = profile.role();
        let session = Session { token, user: profile, role };

        self.store.set(TOKEN_KEY, &session.token);
        save_json(self.store.as_ref(), USER_KEY, &session.user);
        self.store.set(ROLE_KEY, role.as_str());
        self.replace(Some(session.clone()));

        log::info!("signed in as {} ({})", session.user.name, role.as_str());
        self.emit(&SessionEvent::SignedIn { name: session.user.name.clone(), role });
        Ok(session)
    }

    /// Clear the persisted session and notify listeners.
    pub fn sign_out(&self) {
        for key in SESSION_KEYS {
            self.store.remove(key);
        }
        self.replace(None);
        log::info!("signed out");
        self.emit(&SessionEvent::SignedOut);
    }

    /// Replace the stored user after a profile edit. The token is kept; the
    /// role follows the profile's manager flag when the response carries one.
    pub fn update_user(&self, mut profile: Profile) {
        let Some(mut session) = self.current() else {
            log::warn!("profile update ignored: no active session");
            return;
        };
        profile.access_token = None;
        if profile.venue_manager.is_some() {
            session.role = profile.role();
        }
        session.user = profile;

        save_json(self.store.as_ref(), USER_KEY, &session.user);
        self.store.set(ROLE_KEY, session.role.as_str());
        let name = session.user.name.clone();
        self.replace(Some(session));
        self.emit(&SessionEvent::ProfileUpdated { name });
    }

    /// Re-read storage. Emits [`SessionEvent::Reloaded`] only on change.
    pub fn reload(&self) {
        let restored = restore(self.store.as_ref());
        if restored == self.current() {
            return;
        }
        self.replace(restored);
        self.emit(&SessionEvent::Reloaded);
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&SessionEvent) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push((id, Arc::new(listener)));
        }
        Subscription(id)
    }

    pub fn unsubscribe(&self, subscription: Subscription) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.retain(|(id, _)| *id != subscription.0);
        }
    }

    fn replace(&self, session: Option<Session>) {
        if let Ok(mut guard) = self.current.write() {
            *guard = session;
        }
    }

    fn emit(&self, event: &SessionEvent) {
        // Snapshot so listeners may subscribe or unsubscribe while running.
        let listeners: Vec<Listener> = match self.listeners.lock() {
            Ok(guard) => guard.iter().map(|(_, listener)| Arc::clone(listener)).collect(),
            Err(_) => return,
        };
        for listener in listeners {
            listener(event);
        }
    }
}

/// Rebuild a session from storage. A missing token or user means signed out.
fn restore(store: &dyn KeyValueStore) -> Option<Session> {
    let token = store.get(TOKEN_KEY).filter(|token| !token.is_empty())?;
    let user: Profile = load_json(store, USER_KEY)?;
    let role = store
        .get(ROLE_KEY)
        .and_then(|raw| Role::parse(&raw))
        .unwrap_or_else(|| user.role());
    Some(Session { token, user, role })
}

/// Session access for components.
#[derive(Clone, Debug)]
pub struct SessionContext {
    pub hub: SessionHub,
    pub current: RwSignal<Option<Session>>,
}

impl SessionContext {
    /// Mirror `hub` into a signal that tracks every session event.
    pub fn new(hub: SessionHub) -> Self {
        let current = RwSignal::new(hub.current());
        let mirror = hub.clone();
        hub.subscribe(move |_| current.set(mirror.current()));
        Self { hub, current }
    }
}

/// Session context from the app root.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
