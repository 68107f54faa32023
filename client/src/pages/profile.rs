//! Signed-in user's profile card and upcoming bookings.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use api::Booking;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::A;

use crate::config::AVATAR_PLACEHOLDER;
use crate::net::{spawn, use_api};
use crate::state::navigation::Flash;
use crate::state::session::use_session;
use crate::util::format::{alt_text, api_date_label, guests_label};

/// What the bookings section shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookingsView {
    Loading,
    Failed(String),
    Empty,
    List,
}

pub fn bookings_view(loading: bool, error: Option<String>, count: usize) -> BookingsView {
    match (loading, error) {
        (true, _) => BookingsView::Loading,
        (false, Some(message)) => BookingsView::Failed(message),
        (false, None) if count == 0 => BookingsView::Empty,
        (false, None) => BookingsView::List,
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let current = session.current;

    view! {
        <Show when=move || current.with(Option::is_some) fallback=|| view! { <NotLoggedIn /> }>
            <ProfileView />
        </Show>
    }
}

/// Shown on account pages when nobody is signed in.
#[component]
pub fn NotLoggedIn() -> impl IntoView {
    view! {
        <section class="page-status">
            <p>"You need to log in to view your profile."</p>
            <A href="/login" attr:class="button">"Go to login"</A>
        </section>
    }
}

#[component]
fn ProfileView() -> impl IntoView {
    let api = use_api();
    let current = use_session().current;
    let flash = expect_context::<RwSignal<Option<Flash>>>();
    let banner = RwSignal::new(flash.get_untracked());
    flash.set(None);
    if banner.get_untracked().is_some() {
        spawn(async move {
            #[cfg(feature = "csr")]
            gloo_timers::future::TimeoutFuture::new(crate::config::TOAST_DURATION_MS).await;
            banner.set(None);
        });
    }

    let bookings = RwSignal::new(Vec::<Booking>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    if let Some(session) = current.get_untracked() {
        spawn(async move {
            match api.profile_bookings(&session.token, session.name()).await {
                Ok(mut list) => {
                    stays::dashboard::sort_by_start(&mut list);
                    bookings.set(list);
                }
                Err(e) => {
                    log::warn!("bookings for {} failed: {e}", session.name());
                    error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    }

    let user = move || current.get().map(|s| s.user).unwrap_or_default();
    let avatar_url = move || user().avatar.map_or_else(|| AVATAR_PLACEHOLDER.to_owned(), |a| a.url);
    let avatar_alt = move || user().avatar.map_or_else(|| "Profile picture".to_owned(), |a| alt_text(&a, "Profile picture"));
    let role_label = move || if current.with(|s| s.as_ref().is_some_and(|s| s.is_manager())) { "Venue manager" } else { "Customer" };

    view! {
        <section class="profile">
            {move || banner.get().map(|f| view! { <div class="flash flash--success">{f.message()}</div> })}
            <div class="profile__card">
                <img class="profile__avatar" src=avatar_url alt=avatar_alt />
                <div>
                    <h1>{move || user().name}</h1>
                    <p class="muted">{move || user().email}</p>
                    <p class="profile__role">{role_label}</p>
                    {move || user().bio.map(|bio| view! { <p class="profile__bio">{bio}</p> })}
                </div>
                <A href="/edit-profile" attr:class="button button--secondary">"Edit profile"</A>
            </div>
            <h2>"Your bookings"</h2>
            {move || {
                let list = bookings.get();
                match bookings_view(loading.get(), error.get(), list.len()) {
                    BookingsView::Loading => view! { <p class="page-status">"Loading bookings..."</p> }.into_any(),
                    BookingsView::Failed(message) => {
                        view! { <p class="page-status page-status--error">{message}</p> }.into_any()
                    }
                    BookingsView::Empty => view! {
                        <p class="muted">"No bookings yet. " <A href="/venues">"Find a place to stay"</A></p>
                    }
                    .into_any(),
                    BookingsView::List => view! {
                        <ul class="booking-list">
                            {list.into_iter().map(|booking| view! { <BookingRow booking=booking /> }).collect_view()}
                        </ul>
                    }
                    .into_any(),
                }
            }}
        </section>
    }
}

/// One booking line: venue link, dates and guests.
#[component]
pub fn BookingRow(booking: Booking) -> impl IntoView {
    let (venue_name, venue_href) = booking
        .venue
        .as_ref()
        .map_or_else(|| ("Venue".to_owned(), "/venues".to_owned()), |v| (v.name.clone(), format!("/venue/{}", v.id)));
    let customer = booking.customer.as_ref().map(|c| c.name.clone());

    view! {
        <li class="booking-row">
            <A href=venue_href attr:class="booking-row__venue">{venue_name}</A>
            <span class="booking-row__dates">
                {api_date_label(&booking.date_from)} " – " {api_date_label(&booking.date_to)}
            </span>
            <span class="booking-row__guests">{guests_label(booking.guests)}</span>
            {customer.map(|name| view! { <span class="booking-row__customer">{name}</span> })}
        </li>
    }
}
