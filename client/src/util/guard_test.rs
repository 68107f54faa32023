use super::*;
use api::{Profile, Role};

fn session(role: Role) -> Session {
    Session {
        token: "tok".into(),
        user: Profile { name: "kari".into(), ..Profile::default() },
        role,
    }
}

#[test]
fn anonymous_visitor_goes_to_login() {
    assert_eq!(manager_access(None), Access::Redirect("/login"));
}

#[test]
fn customer_goes_to_profile() {
    assert_eq!(manager_access(Some(&session(Role::Customer))), Access::Redirect("/profile"));
}

#[test]
fn manager_is_allowed() {
    assert_eq!(manager_access(Some(&session(Role::Manager))), Access::Allowed);
}

#[test]
fn manager_login_response_passes_guard() {
    use crate::state::session::SessionHub;
    use crate::util::storage::MemoryStore;
    use std::sync::Arc;

    let hub = SessionHub::new(Arc::new(MemoryStore::default()));
    hub.sign_in(Profile {
        name: "kari".into(),
        access_token: Some("tok".into()),
        venue_manager: Some(true),
        ..Profile::default()
    })
    .unwrap();
    assert_eq!(manager_access(hub.current().as_ref()), Access::Allowed);
}
