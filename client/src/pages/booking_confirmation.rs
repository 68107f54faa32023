//! Booking confirmation.
//!
//! Reads the receipt the detail page left in context. Without one (a reload,
//! a typed URL) there is nothing to confirm and the visitor is sent to the
//! venue list.

#[cfg(test)]
#[path = "booking_confirmation_test.rs"]
mod booking_confirmation_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::navigation::BookingReceipt;
use crate::state::session::{Session, use_session};
use crate::util::format::{guests_label, long_date, nights_label};

/// Where "back to my bookings" leads.
pub fn bookings_path(session: Option<&Session>) -> &'static str {
    if session.is_some_and(Session::is_manager) { "/dashboard" } else { "/profile" }
}

#[component]
pub fn BookingConfirmationPage() -> impl IntoView {
    let receipt = expect_context::<RwSignal<Option<BookingReceipt>>>();
    let current = use_session().current;
    let navigate = use_navigate();

    Effect::new(move || {
        if receipt.with(Option::is_none) {
            navigate("/venues", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let back_href = move || current.with(|s| bookings_path(s.as_ref()).to_owned());

    move || {
        receipt.get().map(|r| {
            view! {
                <section class="confirmation">
                    <h1>"Booking confirmed!"</h1>
                    <p>"Your stay at " <strong>{r.venue_name.clone()}</strong> " is booked."</p>
                    <dl class="confirmation__facts">
                        <dt>"Check-in"</dt>
                        <dd>{long_date(r.date_from)}</dd>
                        <dt>"Check-out"</dt>
                        <dd>{long_date(r.date_to)}</dd>
                        <dt>"Length"</dt>
                        <dd>{nights_label(r.nights())}</dd>
                        <dt>"Guests"</dt>
                        <dd>{guests_label(r.guests)}</dd>
                        <dt>"Reference"</dt>
                        <dd class="muted">{r.booking_id.clone()}</dd>
                    </dl>
                    <div class="confirmation__actions">
                        <A href=format!("/venue/{}", r.venue_id) attr:class="button button--secondary">
                            "View venue"
                        </A>
                        <A href=back_href attr:class="button">"Go back to My Bookings"</A>
                    </div>
                </section>
            }
        })
    }
}
