//! Top navigation bar.
//!
//! Reads the session signal, so it re-renders on login, logout, profile edits
//! and changes made in other tabs.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::components::toast_host::use_toaster;
use crate::state::session::SessionContext;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let toaster = use_toaster();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    let current = session.current;

    let signed_in = move || current.with(Option::is_some);
    let is_manager = move || current.with(|s| s.as_ref().is_some_and(|s| s.is_manager()));
    let user_name = move || current.with(|s| s.as_ref().map(|s| s.name().to_owned()).unwrap_or_default());

    let on_logout = {
        let hub = session.hub.clone();
        move |_: leptos::ev::MouseEvent| {
            hub.sign_out();
            menu_open.set(false);
            toaster.info("You have been logged out.");
            navigate("/", NavigateOptions::default());
        }
    };

    view! {
        <header class="navbar">
            <A href="/" attr:class="navbar__brand">"Holidaze"</A>
            <button
                class="navbar__toggle"
                aria-label="Toggle navigation"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <nav class="navbar__links" class:navbar__links--open=move || menu_open.get()>
                <A href="/venues">"Venues"</A>
                <Show
                    when=signed_in
                    fallback=|| view! {
                        <A href="/login">"Log in"</A>
                        <A href="/register" attr:class="navbar__cta">"Sign up"</A>
                    }
                >
                    <Show when=is_manager>
                        <A href="/dashboard">"Dashboard"</A>
                    </Show>
                    <A href="/profile">{user_name}</A>
                    <button class="navbar__logout" on:click=on_logout.clone()>"Log out"</button>
                </Show>
            </nav>
        </header>
    }
}
