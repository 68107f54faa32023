//! Venue detail page: gallery, facts, availability calendar and booking.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads one venue with owner, bookings and reviews embedded. The embedded
//! bookings become the booked ranges that filter the date picker. Booking
//! submission validates locally through `stays::prepare_booking` and only
//! then posts; on success the receipt is handed to the confirmation page
//! through context.

#[cfg(test)]
#[path = "venue_detail_test.rs"]
mod venue_detail_test;

use api::{Venue, VenueEmbeds};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use stays::listing::GUEST_CHOICES;
use stays::{RangeSelection, SelectionError, booked_ranges, is_own_venue, prepare_booking};

use crate::components::date_range_picker::{DateRangePicker, rejection_message};
use crate::components::gallery::Gallery;
use crate::components::review_quote::ReviewQuote;
use crate::components::toast_host::use_toaster;
use crate::net::{spawn, use_api};
use crate::state::navigation::BookingReceipt;
use crate::state::session::{Session, use_session};
use crate::util::calendar::today;
use crate::util::format::{
    description_or_default, guests_label, location_label, long_date, nights_label, price_label, search_href, stars,
};

/// What the booking panel offers the current visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingCta {
    LogIn,
    OwnVenue,
    Book,
}

pub fn booking_cta(session: Option<&Session>, venue: &Venue) -> BookingCta {
    match session {
        None => BookingCta::LogIn,
        Some(s) if is_own_venue(s.role, s.name(), venue) => BookingCta::OwnVenue,
        Some(_) => BookingCta::Book,
    }
}

/// Guest counts offered by the selector: 1 through the venue's limit.
pub fn guest_options(max_guests: Option<u32>) -> Vec<u32> {
    let max = max_guests.unwrap_or(GUEST_CHOICES[GUEST_CHOICES.len() - 1]);
    (1..=max.max(1)).collect()
}

#[derive(Clone, Debug)]
enum Load {
    Loading,
    Failed(String),
    Ready(Venue),
}

#[component]
pub fn VenueDetailPage() -> impl IntoView {
    let api = use_api();
    let params = use_params_map();
    let navigate = use_navigate();
    let load = RwSignal::new(Load::Loading);
    let search = RwSignal::new(String::new());

    Effect::new(move || {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        load.set(Load::Loading);
        let api = api.clone();
        spawn(async move {
            match api.venue(&id, VenueEmbeds::all()).await {
                Ok(venue) => load.set(Load::Ready(venue)),
                Err(e) => {
                    log::warn!("venue {id} failed to load: {e}");
                    load.set(Load::Failed(e.user_message()));
                }
            }
        });
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let query = search.get_untracked().trim().to_owned();
        if query.is_empty() {
            return;
        }
        navigate(&search_href(&query), NavigateOptions::default());
    };

    view! {
        <section class="venue-detail">
            <form class="search-bar" role="search" on:submit=on_search>
                <label class="visually-hidden" for="venue-detail-search">"Search destinations"</label>
                <input
                    id="venue-detail-search"
                    type="text"
                    placeholder="Search destinations..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </form>
            {move || match load.get() {
                Load::Loading => view! { <p class="page-status">"Loading venue..."</p> }.into_any(),
                Load::Failed(message) => view! {
                    <div class="page-status page-status--error">
                        <h1>"Something went wrong"</h1>
                        <p>{message}</p>
                        <A href="/venues">"Back to venues"</A>
                    </div>
                }
                .into_any(),
                Load::Ready(venue) => view! { <VenueBody venue=venue /> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn VenueBody(venue: Venue) -> impl IntoView {
    let rating = venue.rating.unwrap_or(0.0);
    let amenities = venue.meta.labels();
    let reviews = venue.reviews.clone();
    let owner_name = venue.owner.as_ref().map(|o| o.name.clone()).unwrap_or_else(|| "Unknown host".to_owned());

    view! {
        <Gallery media=venue.media.clone() venue_name=venue.name.clone() />
        <div class="venue-detail__layout">
            <div class="venue-detail__main">
                <h1>{venue.name.clone()}</h1>
                <p class="venue-detail__location">{location_label(&venue.location)}</p>
                <p class="venue-detail__rating">
                    {if rating > 0.0 { stars(rating) } else { "No rating yet".to_owned() }}
                </p>
                <p class="venue-detail__facts">
                    {price_label(venue.price)}
                    {venue.max_guests.map(|max| format!(" · Max {}", guests_label(max)))}
                </p>
                <h2>"Description"</h2>
                <p>{description_or_default(&venue).to_owned()}</p>
                <h2>"Rules & policies"</h2>
                <ul class="venue-detail__rules">
                    <li>"Check in 15:00"</li>
                    <li>"Check out 11:00"</li>
                    <li>"No smoking"</li>
                </ul>
                <h2>"Amenities"</h2>
                {if amenities.is_empty() {
                    view! { <p class="muted">"Amenities information is not available."</p> }.into_any()
                } else {
                    view! {
                        <ul class="amenities">
                            {amenities.into_iter().map(|label| view! { <li>{label}</li> }).collect_view()}
                        </ul>
                    }
                    .into_any()
                }}
                <h2>"Reviews"</h2>
                {if reviews.is_empty() {
                    view! { <p class="muted">"No reviews yet for this venue."</p> }.into_any()
                } else {
                    view! {
                        <div class="reviews">
                            {reviews
                                .into_iter()
                                .map(|review| view! { <ReviewQuote review=review /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }}
            </div>
            <aside class="venue-detail__aside">
                <BookingPanel venue=venue.clone() />
                <p class="venue-detail__host">"Hosted by " <strong>{owner_name}</strong></p>
            </aside>
        </div>
    }
}

#[component]
fn BookingPanel(venue: Venue) -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let toaster = use_toaster();
    let navigate = use_navigate();
    let receipt = expect_context::<RwSignal<Option<BookingReceipt>>>();

    let today = today();
    let ranges = booked_ranges(&venue.bookings);
    let selection = RwSignal::new(RangeSelection::default());
    let guests = RwSignal::new(1_u32);
    let submitting = RwSignal::new(false);
    let options = guest_options(venue.max_guests);
    let venue_id = venue.id.clone();
    let venue = StoredValue::new(venue);
    let current = session.current;

    let cta = move || current.with(|s| venue.with_value(|v| booking_cta(s.as_ref(), v)));
    let on_reject = Callback::new(move |err: SelectionError| toaster.error(rejection_message(err)));

    let summary = move || {
        let picked = selection.get();
        match (picked.start(), picked.end(), picked.nights()) {
            (Some(start), Some(end), Some(nights)) => {
                format!("{} → {} ({})", long_date(start), long_date(end), nights_label(nights))
            }
            (Some(start), None, _) => format!("{} → pick a check-out date", long_date(start)),
            _ => "Select your stay dates".to_owned(),
        }
    };

    let on_book = move |_: leptos::ev::MouseEvent| {
        if submitting.get_untracked() {
            return;
        }
        let session_now = current.get_untracked();
        let picked = selection.get_untracked();
        let prepared = venue.with_value(|v| {
            prepare_booking(session_now.as_ref().map(Session::booker), v, &picked, guests.get_untracked())
        });
        let body = match prepared {
            Ok(body) => body,
            Err(e) => {
                toaster.error(e.to_string());
                return;
            }
        };
        let Some(token) = session_now.map(|s| s.token) else {
            return;
        };
        let Some((start, end)) = picked.dates() else {
            return;
        };
        submitting.set(true);
        let api = api.clone();
        let navigate = navigate.clone();
        spawn(async move {
            match api.create_booking(&token, &body).await {
                Ok(booking) => {
                    let next = venue.with_value(|v| {
                        BookingReceipt::from_booking(&booking, v).unwrap_or_else(|| BookingReceipt {
                            booking_id: booking.id.clone(),
                            venue_id: v.id.clone(),
                            venue_name: v.name.clone(),
                            date_from: start,
                            date_to: end,
                            guests: body.guests,
                        })
                    });
                    log::info!("booking {} created for venue {}", next.booking_id, next.venue_id);
                    receipt.set(Some(next));
                    toaster.success("Booking confirmed!");
                    navigate("/booking-confirmation", NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("booking failed: {e}");
                    toaster.error(e.user_message());
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="booking-panel">
            <h2>"Book your stay"</h2>
            <DateRangePicker ranges=ranges today=today selection=selection on_reject=on_reject />
            <p class="booking-panel__summary">{summary}</p>
            <label class="field">
                <span>"Guests"</span>
                <select on:change=move |ev| {
                    guests.set(event_target_value(&ev).parse().unwrap_or(1));
                }>
                    {options
                        .into_iter()
                        .map(|n| view! { <option value=n.to_string() selected=move || guests.get() == n>{guests_label(n)}</option> })
                        .collect_view()}
                </select>
            </label>
            {move || match cta() {
                BookingCta::LogIn => view! {
                    <p class="booking-panel__notice">
                        "You must " <A href="/login">"log in"</A> " before booking."
                    </p>
                }
                .into_any(),
                BookingCta::OwnVenue => view! {
                    <p class="booking-panel__notice">"You manage this venue, so you cannot book it yourself."</p>
                    <A href=format!("/edit/{venue_id}") attr:class="button button--secondary">"Edit venue"</A>
                }
                .into_any(),
                BookingCta::Book => view! {
                    <button
                        class="button"
                        disabled=move || submitting.get()
                        on:click=on_book.clone()
                    >
                        {move || if submitting.get() { "Booking..." } else { "Book now" }}
                    </button>
                }
                .into_any(),
            }}
        </div>
    }
}
