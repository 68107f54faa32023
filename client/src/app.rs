//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, navbar::Navbar, toast_host::{ToastHost, Toaster}};
use crate::net::make_api;
use crate::pages::{
    booking_confirmation::BookingConfirmationPage, create_venue::CreateVenuePage, dashboard::DashboardPage,
    edit_profile::EditProfilePage, edit_venue::EditVenuePage, home::HomePage, login::LoginPage,
    not_found::NotFoundPage, profile::ProfilePage, register::RegisterPage, venue_detail::VenueDetailPage,
    venues::VenuesPage,
};
use crate::state::navigation::{BookingReceipt, Flash};
use crate::state::session::{SessionContext, SessionHub};
use crate::util::storage::BrowserStore;

/// Root application component.
///
/// Provides the API client, session, toasts and the page-to-page handoff
/// signals, then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::new(SessionHub::new(Arc::new(BrowserStore)));
    watch_other_tabs(&session.hub);

    provide_context(make_api());
    provide_context(session);
    provide_context(Toaster::new());
    provide_context(RwSignal::new(None::<BookingReceipt>));
    provide_context(RwSignal::new(None::<Flash>));

    view! {
        <Title text="Holidaze"/>
        <Meta name="description" content="Find and book venues, or host your own."/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("venues") view=VenuesPage/>
                    <Route path=(StaticSegment("venue"), ParamSegment("id")) view=VenueDetailPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("edit-profile") view=EditProfilePage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("create") view=CreateVenuePage/>
                    <Route path=(StaticSegment("edit"), ParamSegment("id")) view=EditVenuePage/>
                    <Route path=StaticSegment("booking-confirmation") view=BookingConfirmationPage/>
                </Routes>
            </main>
            <Footer/>
            <ToastHost/>
        </Router>
    }
}

/// Re-read the session when another tab writes one of its keys.
fn watch_other_tabs(hub: &SessionHub) {
    #[cfg(feature = "csr")]
    {
        use crate::state::session::SESSION_KEYS;

        let hub = hub.clone();
        let _ = window_event_listener(leptos::ev::storage, move |ev: web_sys::StorageEvent| {
            // A `None` key means the whole storage area was cleared.
            if ev.key().is_none_or(|key| SESSION_KEYS.contains(&key.as_str())) {
                hub.reload();
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = hub;
}
