//! New venue form for managers.

use api::VenuePayload;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast_host::use_toaster;
use crate::components::venue_form::{VenueForm, VenueFormValues};
use crate::net::{spawn, use_api};
use crate::state::navigation::Flash;
use crate::state::session::use_session;
use crate::util::guard::install_manager_guard;

#[component]
pub fn CreateVenuePage() -> impl IntoView {
    let api = use_api();
    let current = use_session().current;
    let toaster = use_toaster();
    let navigate = use_navigate();
    let flash = expect_context::<RwSignal<Option<Flash>>>();
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    install_manager_guard(current, navigate.clone());

    let on_submit = Callback::new(move |payload: VenuePayload| {
        if busy.get_untracked() {
            return;
        }
        let Some(token) = current.get_untracked().map(|s| s.token) else {
            return;
        };
        busy.set(true);
        error.set(None);
        let api = api.clone();
        let navigate = navigate.clone();
        spawn(async move {
            match api.create_venue(&token, &payload).await {
                Ok(venue) => {
                    log::info!("created venue {}", venue.id);
                    flash.set(Some(Flash::VenueCreated));
                    navigate("/dashboard", NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("create venue failed: {e}");
                    toaster.error(e.user_message());
                    error.set(Some(e.user_message()));
                }
            }
            busy.set(false);
        });
    });

    view! {
        <section class="venue-editor">
            <h1>"Create venue"</h1>
            <VenueForm
                initial=VenueFormValues::default()
                submit_label="Create venue"
                busy=busy
                error=error
                on_submit=on_submit
            />
        </section>
    }
}
