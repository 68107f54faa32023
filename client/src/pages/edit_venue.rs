//! Edit an existing venue. The form is prefilled from a fresh fetch.

use api::{Venue, VenueEmbeds, VenuePayload};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::toast_host::use_toaster;
use crate::components::venue_form::{VenueForm, VenueFormValues};
use crate::net::{spawn, use_api};
use crate::state::navigation::Flash;
use crate::state::session::use_session;
use crate::util::guard::{Access, install_manager_guard, manager_access};

#[component]
pub fn EditVenuePage() -> impl IntoView {
    let api = use_api();
    let current = use_session().current;
    let toaster = use_toaster();
    let navigate = use_navigate();
    let params = use_params_map();
    let flash = expect_context::<RwSignal<Option<Flash>>>();

    let venue = RwSignal::new(None::<Venue>);
    let load_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let venue_id = move || params.with(|p| p.get("id").unwrap_or_default());

    install_manager_guard(current, navigate.clone());

    let fetch_api = api.clone();
    Effect::new(move || {
        let id = venue_id();
        if id.is_empty() || manager_access(current.get_untracked().as_ref()) != Access::Allowed {
            return;
        }
        venue.set(None);
        load_error.set(None);
        let api = fetch_api.clone();
        spawn(async move {
            match api.venue(&id, VenueEmbeds { owner: true, ..VenueEmbeds::default() }).await {
                Ok(found) => venue.set(Some(found)),
                Err(e) => {
                    log::warn!("venue {id} failed to load for editing: {e}");
                    load_error.set(Some(e.user_message()));
                }
            }
        });
    });

    let on_submit = Callback::new(move |payload: VenuePayload| {
        if busy.get_untracked() {
            return;
        }
        let Some(token) = current.get_untracked().map(|s| s.token) else {
            return;
        };
        let id = venue_id();
        busy.set(true);
        error.set(None);
        let api = api.clone();
        let navigate = navigate.clone();
        spawn(async move {
            match api.update_venue(&token, &id, &payload).await {
                Ok(_) => {
                    flash.set(Some(Flash::VenueUpdated));
                    navigate("/dashboard", NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("update venue {id} failed: {e}");
                    toaster.error(e.user_message());
                    error.set(Some(e.user_message()));
                }
            }
            busy.set(false);
        });
    });

    view! {
        <section class="venue-editor">
            <h1>"Edit venue"</h1>
            {move || {
                if let Some(message) = load_error.get() {
                    return view! { <p class="page-status page-status--error">{message}</p> }.into_any();
                }
                match venue.get() {
                    None => view! { <p class="page-status">"Loading venue..."</p> }.into_any(),
                    Some(found) => view! {
                        <VenueForm
                            initial=VenueFormValues::from_venue(&found)
                            submit_label="Save changes"
                            busy=busy
                            error=error
                            on_submit=on_submit
                        />
                    }
                    .into_any(),
                }
            }}
        </section>
    }
}
