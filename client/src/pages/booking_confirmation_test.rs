use super::*;
use api::{Profile, Role};

fn session(role: Role) -> Session {
    Session { token: "tok".into(), user: Profile { name: "kari".into(), ..Profile::default() }, role }
}

#[test]
fn managers_return_to_dashboard() {
    assert_eq!(bookings_path(Some(&session(Role::Manager))), "/dashboard");
}

#[test]
fn customers_and_visitors_return_to_profile() {
    assert_eq!(bookings_path(Some(&session(Role::Customer))), "/profile");
    assert_eq!(bookings_path(None), "/profile");
}
