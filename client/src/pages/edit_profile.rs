//! Edit the signed-in user's avatar and bio.
//!
//! The saved profile replaces the session user through the hub, which emits
//! `ProfileUpdated` so the navbar and profile card refresh.

#[cfg(test)]
#[path = "edit_profile_test.rs"]
mod edit_profile_test;

use api::{Media, Profile, ProfileUpdate};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast_host::use_toaster;
use crate::net::{spawn, use_api};
use crate::pages::profile::NotLoggedIn;
use crate::state::navigation::Flash;
use crate::state::session::use_session;

/// Raw edit-profile fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub avatar_url: String,
    pub avatar_alt: String,
    pub bio: String,
}

impl ProfileForm {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            avatar_url: profile.avatar.as_ref().map(|a| a.url.clone()).unwrap_or_default(),
            avatar_alt: profile
                .avatar
                .as_ref()
                .and_then(|a| a.alt.clone())
                .unwrap_or_else(|| "Profile picture".to_owned()),
            bio: profile.bio.clone().unwrap_or_default(),
        }
    }

    /// Build the update body. The manager flag is carried over unchanged.
    ///
    /// # Errors
    ///
    /// A user-facing message when there is nothing to save or the avatar URL
    /// is not absolute.
    pub fn to_update(&self, venue_manager: bool) -> Result<ProfileUpdate, &'static str> {
        let url = self.avatar_url.trim();
        let bio = self.bio.trim();
        if url.is_empty() && bio.is_empty() {
            return Err("Add an avatar URL or a bio to update.");
        }
        if !url.is_empty() && !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err("Avatar URL must start with http:// or https://");
        }
        let avatar = (!url.is_empty()).then(|| Media {
            url: url.to_owned(),
            alt: Some(self.avatar_alt.trim().to_owned()).filter(|alt| !alt.is_empty()),
        });
        Ok(ProfileUpdate {
            bio: (!bio.is_empty()).then(|| bio.to_owned()),
            avatar,
            venue_manager: Some(venue_manager),
        })
    }
}

#[component]
pub fn EditProfilePage() -> impl IntoView {
    let current = use_session().current;

    view! {
        <Show when=move || current.with(Option::is_some) fallback=|| view! { <NotLoggedIn /> }>
            <EditProfileForm />
        </Show>
    }
}

#[component]
fn EditProfileForm() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let toaster = use_toaster();
    let navigate = use_navigate();
    let flash = expect_context::<RwSignal<Option<Flash>>>();

    let initial = session.current.with_untracked(|s| s.as_ref().map(|s| ProfileForm::from_profile(&s.user)));
    let form = RwSignal::new(initial.unwrap_or_default());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(signed_in) = session.current.get_untracked() else {
            return;
        };
        let update = match form.with_untracked(|f| f.to_update(signed_in.is_manager())) {
            Ok(update) => update,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let api = api.clone();
        let hub = session.hub.clone();
        let navigate = navigate.clone();
        spawn(async move {
            match api.update_profile(&signed_in.token, signed_in.name(), &update).await {
                Ok(profile) => {
                    hub.update_user(profile);
                    flash.set(Some(Flash::ProfileUpdated));
                    navigate("/profile", NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("profile update failed: {e}");
                    toaster.error(e.user_message());
                    error.set(Some(e.user_message()));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <section class="edit-profile">
            <h1>"Edit profile"</h1>
            <form class="auth-form" on:submit=on_submit>
                <label class="field">
                    <span>"Avatar URL"</span>
                    <input
                        type="url"
                        placeholder="https://"
                        prop:value=move || form.with(|f| f.avatar_url.clone())
                        on:input=move |ev| form.update(|f| f.avatar_url = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Avatar ALT text"</span>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.avatar_alt.clone())
                        on:input=move |ev| form.update(|f| f.avatar_alt = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Bio"</span>
                    <textarea
                        rows="4"
                        prop:value=move || form.with(|f| f.bio.clone())
                        on:input=move |ev| form.update(|f| f.bio = event_target_value(&ev))
                    ></textarea>
                </label>
                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                <button class="button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save changes" }}
                </button>
            </form>
        </section>
    }
}
