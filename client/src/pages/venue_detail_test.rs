use super::*;
use api::{Owner, Profile, Role};

fn venue_owned_by(name: &str) -> Venue {
    Venue {
        id: "v1".into(),
        name: "Loft".into(),
        max_guests: Some(3),
        owner: Some(Owner { name: name.into(), ..Owner::default() }),
        ..Venue::default()
    }
}

fn session(name: &str, role: Role) -> Session {
    Session { token: "tok".into(), user: Profile { name: name.into(), ..Profile::default() }, role }
}

#[test]
fn visitor_is_asked_to_log_in() {
    assert_eq!(booking_cta(None, &venue_owned_by("kari")), BookingCta::LogIn);
}

#[test]
fn owning_manager_cannot_book() {
    let venue = venue_owned_by("kari");
    assert_eq!(booking_cta(Some(&session("kari", Role::Manager)), &venue), BookingCta::OwnVenue);
}

#[test]
fn other_users_can_book() {
    let venue = venue_owned_by("kari");
    assert_eq!(booking_cta(Some(&session("ola", Role::Manager)), &venue), BookingCta::Book);
    assert_eq!(booking_cta(Some(&session("kari", Role::Customer)), &venue), BookingCta::Book);
}

#[test]
fn guest_options_follow_venue_limit() {
    assert_eq!(guest_options(Some(3)), vec![1, 2, 3]);
    assert_eq!(guest_options(None), vec![1, 2, 3, 4, 5]);
    assert_eq!(guest_options(Some(0)), vec![1]);
}
