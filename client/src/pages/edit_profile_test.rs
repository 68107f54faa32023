use super::*;

#[test]
fn prefill_uses_current_avatar() {
    let profile = Profile {
        name: "kari".into(),
        avatar: Some(Media { url: "https://img/a.png".into(), alt: None }),
        bio: Some("Hi".into()),
        ..Profile::default()
    };
    let form = ProfileForm::from_profile(&profile);
    assert_eq!(form.avatar_url, "https://img/a.png");
    assert_eq!(form.avatar_alt, "Profile picture");
    assert_eq!(form.bio, "Hi");
}

#[test]
fn update_keeps_manager_flag() {
    let form = ProfileForm { avatar_url: " https://img/b.png ".into(), avatar_alt: "Me".into(), bio: String::new() };
    let update = form.to_update(true).unwrap();
    assert_eq!(update.venue_manager, Some(true));
    assert_eq!(update.bio, None);
    let avatar = update.avatar.unwrap();
    assert_eq!(avatar.url, "https://img/b.png");
    assert_eq!(avatar.alt.as_deref(), Some("Me"));

    let update = form.to_update(false).unwrap();
    assert_eq!(update.venue_manager, Some(false));
}

#[test]
fn bio_only_update_sends_no_avatar() {
    let form = ProfileForm { bio: "Hosting since 2019".into(), ..ProfileForm::default() };
    let update = form.to_update(false).unwrap();
    assert!(update.avatar.is_none());
    assert_eq!(update.bio.as_deref(), Some("Hosting since 2019"));
}

#[test]
fn empty_and_relative_inputs_are_rejected() {
    assert_eq!(ProfileForm::default().to_update(false), Err("Add an avatar URL or a bio to update."));
    let form = ProfileForm { avatar_url: "avatar.png".into(), ..ProfileForm::default() };
    assert_eq!(form.to_update(false), Err("Avatar URL must start with http:// or https://"));
}
