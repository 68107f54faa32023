//! Venue summary card used by the home page, the venue list and the
//! dashboard.

use api::Venue;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::util::format::{alt_text, location_label, price_label, stars};

#[component]
pub fn VenueCard(venue: Venue, #[prop(optional)] compact: bool) -> impl IntoView {
    let href = format!("/venue/{}", venue.id);
    let image = crate::util::format::primary_image(&venue);
    let alt = alt_text(&image, &venue.name);
    let location = location_label(&venue.location);
    let rating = venue.rating.unwrap_or(0.0);
    let guests = venue.max_guests.map(|max| format!("Up to {max} guests"));

    view! {
        <A href=href attr:class="venue-card">
            <img class="venue-card__image" src=image.url alt=alt loading="lazy" />
            <div class="venue-card__body">
                <h3 class="venue-card__name">{venue.name}</h3>
                <p class="venue-card__location">{location}</p>
                <Show when=move || !compact>
                    <p class="venue-card__rating" aria-label=format!("Rated {rating:.1} of 5")>
                        {stars(rating)}
                    </p>
                </Show>
                {guests.map(|text| view! { <p class="venue-card__guests">{text}</p> })}
                <p class="venue-card__price">{price_label(venue.price)}</p>
            </div>
        </A>
    }
}
