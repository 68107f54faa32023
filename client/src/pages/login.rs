//! Email + password login.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use api::Role;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::toast_host::use_toaster;
use crate::net::{spawn, use_api};
use crate::state::session::use_session;

/// Trimmed email and raw password, both required.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Please enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Where a freshly signed-in user lands.
pub fn landing_path(role: Role) -> &'static str {
    if role.is_manager() { "/dashboard" } else { "/profile" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let toaster = use_toaster();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(values) => values,
            Err(message) => {
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
            let outcome = match api.login(&email_value, &password_value).await {
                Ok(profile) => hub.sign_in(profile).map_err(str::to_owned),
                Err(e) => {
                    log::warn!("login failed: {e}");
                    Err(e.user_message())
                }
            };
            busy.set(false);
            match outcome {
                Ok(signed_in) => {
                    toaster.success("Logged in successfully!");
                    navigate(landing_path(signed_in.role), NavigateOptions::default());
                }
                Err(message) => {
                    toaster.error(message.clone());
                    info.set(message);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            required
                            placeholder="example@stud.noroff.no"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Password"</span>
                        <div class="password-field">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                required
                                placeholder="Enter your password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
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
                    <Show when=move || !info.get().is_empty()>
                        <p class="form-error">{move || info.get()}</p>
                    </Show>
                    <button class="button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Log in" }}
                    </button>
                </form>
                <p class="auth-card__switch">"New here? " <A href="/register">"Create an account"</A></p>
            </div>
        </div>
    }
}
