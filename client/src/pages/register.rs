//! Account registration, followed by an automatic login.
//!
//! Validation runs before any request: a Noroff email address, a name, and a
//! password of at least [`MIN_PASSWORD_LEN`] characters.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use api::RegisterRequest;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::toast_host::use_toaster;
use crate::net::{spawn, use_api};
use crate::pages::login::landing_path;
use crate::state::session::use_session;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Email domains the API accepts for registration.
pub const ALLOWED_EMAIL_SUFFIXES: [&str; 2] = ["@stud.noroff.no", "@noroff.no"];

pub fn is_allowed_email(email: &str) -> bool {
    ALLOWED_EMAIL_SUFFIXES.iter().any(|suffix| email.ends_with(suffix))
}

/// Raw registration fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub venue_manager: bool,
}

impl RegisterForm {
    /// Validate and build the request body.
    ///
    /// # Errors
    ///
    /// A user-facing message for the first invalid field.
    pub fn validate(&self) -> Result<RegisterRequest, &'static str> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() || email.is_empty() || self.password.is_empty() {
            return Err("Please fill in all fields.");
        }
        if !is_allowed_email(email) {
            return Err("Email must end with @stud.noroff.no or @noroff.no");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err("Password must be at least 8 characters.");
        }
        Ok(RegisterRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            password: self.password.clone(),
            venue_manager: self.venue_manager,
        })
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let toaster = use_toaster();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterForm::default());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let body = match form.with_untracked(RegisterForm::validate) {
            Ok(body) => body,
            Err(message) => {
                toaster.error(message);
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let api = api.clone();
        let hub = session.hub.clone();
        let navigate = navigate.clone();
        spawn(async move {
            let outcome = async {
                api.register(&body).await.map_err(|e| e.user_message())?;
                let profile = api.login(&body.email, &body.password).await.map_err(|e| e.user_message())?;
                hub.sign_in(profile).map_err(str::to_owned)
            }
            .await;
            busy.set(false);
            match outcome {
                Ok(signed_in) => {
                    toaster.success("Registration successful!");
                    navigate(landing_path(signed_in.role), NavigateOptions::default());
                }
                Err(message) => {
                    log::warn!("registration failed: {message}");
                    toaster.error(message.clone());
                    info.set(message);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="field">
                        <span>"Name"</span>
                        <input
                            type="text"
                            required
                            placeholder="Full name"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            required
                            placeholder="example@stud.noroff.no"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Password"</span>
                        <div class="password-field">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                required
                                minlength="8"
                                placeholder="Minimum 8 characters"
                                prop:value=move || form.with(|f| f.password.clone())
                                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="password-field__toggle"
                                on:click=move |_| show_password.update(|shown| *shown = !*shown)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </label>
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.venue_manager)
                            on:change=move |ev| form.update(|f| f.venue_manager = event_target_checked(&ev))
                        />
                        "I want to host venues (venue manager)"
                    </label>
                    <Show when=move || !info.get().is_empty()>
                        <p class="form-error">{move || info.get()}</p>
                    </Show>
                    <button class="button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <p class="auth-card__switch">"Already have an account? " <A href="/login">"Log in"</A></p>
            </div>
        </div>
    }
}
