//! Manager dashboard: the manager's venues and their bookings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Manager-only route. The guard redirects before any fetch; managers get
//! both lists from one concurrent `dashboard` call. Deleting a venue asks for
//! confirmation, then edits the loaded list in place.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::toast_host::use_toaster;
use crate::components::venue_card::VenueCard;
use crate::net::{spawn, use_api};
use crate::pages::profile::BookingRow;
use crate::state::dashboard::DashboardState;
use crate::state::navigation::Flash;
use crate::state::session::use_session;
use crate::util::guard::{Access, install_manager_guard, manager_access};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let toaster = use_toaster();
    let current = session.current;
    let state = RwSignal::new(DashboardState::loading());
    let flash = expect_context::<RwSignal<Option<Flash>>>();

    install_manager_guard(current, use_navigate());

    if let Some(message) = flash.get_untracked().map(Flash::message) {
        flash.set(None);
        toaster.success(message);
    }

    let signed_in = current.get_untracked();
    if let (Access::Allowed, Some(signed_in)) = (manager_access(signed_in.as_ref()), signed_in.clone()) {
        let api = api.clone();
        spawn(async move {
            match api.dashboard(&signed_in.token, signed_in.name()).await {
                Ok((venues, bookings)) => state.update(|s| s.loaded(venues, bookings)),
                Err(e) => {
                    log::warn!("dashboard load failed: {e}");
                    state.update(|s| s.failed(e.user_message()));
                }
            }
        });
    }

    let on_delete = Callback::new(move |id: String| {
        if !confirm("Are you sure you want to delete this venue?") {
            return;
        }
        let Some(token) = current.get_untracked().map(|s| s.token) else {
            return;
        };
        let mut started = false;
        state.update(|s| started = s.begin_delete(&id));
        if !started {
            return;
        }
        let api = api.clone();
        spawn(async move {
            let result = api.delete_venue(&token, &id).await;
            state.update(|s| s.finish_delete(&id, result.is_ok()));
            match result {
                Ok(()) => toaster.success("Venue deleted."),
                Err(e) => {
                    log::warn!("delete venue {id} failed: {e}");
                    toaster.error(e.user_message());
                }
            }
        });
    });

    view! {
        <section class="dashboard">
            <header class="dashboard__header">
                <h1>"Manager dashboard"</h1>
                <A href="/create" attr:class="button">"Create venue"</A>
            </header>
            {move || {
                let snapshot = state.get();
                if snapshot.loading {
                    return view! { <p class="page-status">"Loading dashboard..."</p> }.into_any();
                }
                if let Some(message) = snapshot.error {
                    return view! { <p class="page-status page-status--error">{message}</p> }.into_any();
                }
                view! {
                    <h2>"My venues"</h2>
                    {if snapshot.venues.is_empty() {
                        view! { <p class="muted">"You have not listed any venues yet."</p> }.into_any()
                    } else {
                        view! {
                            <div class="venue-grid">
                                {snapshot
                                    .venues
                                    .into_iter()
                                    .map(|venue| {
                                        let id = venue.id.clone();
                                        let delete_id = id.clone();
                                        let deleting = move || state.with(|s| s.is_deleting(&id));
                                        let deleting_label = deleting.clone();
                                        view! {
                                            <div class="dashboard__venue">
                                                <VenueCard venue=venue compact=true />
                                                <div class="dashboard__actions">
                                                    <A href=format!("/edit/{delete_id}") attr:class="button button--secondary">
                                                        "Edit"
                                                    </A>
                                                    <button
                                                        class="button button--danger"
                                                        disabled=deleting
                                                        on:click=move |_| on_delete.run(delete_id.clone())
                                                    >
                                                        {move || delete_label(deleting_label())}
                                                    </button>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }}
                    <h2>"Upcoming bookings"</h2>
                    {if snapshot.bookings.is_empty() {
                        view! { <p class="muted">"No bookings for your venues yet."</p> }.into_any()
                    } else {
                        view! {
                            <ul class="booking-list">
                                {snapshot
                                    .bookings
                                    .into_iter()
                                    .map(|booking| view! { <BookingRow booking=booking /> })
                                    .collect_view()}
                            </ul>
                        }
                        .into_any()
                    }}
                }
                .into_any()
            }}
        </section>
    }
}

/// Text of a venue's delete button.
pub fn delete_label(deleting: bool) -> &'static str {
    if deleting { "Deleting…" } else { "Delete" }
}

/// Blocking browser confirm dialog. Natively there is nobody to ask.
fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.confirm_with_message(message).ok()).unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}
