//! Landing page: hero search, featured venues, promo banner, guest reviews.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use api::types::ReviewAuthor;
use api::{Review, Venue, VenueEmbeds};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::promo_banner::PromoBanner;
use crate::components::review_quote::ReviewQuote;
use crate::components::venue_card::VenueCard;
use crate::config::FEATURED_LIMIT;
use crate::net::{spawn, use_api};
use crate::util::format::search_href;

/// Reviews shown under "What our guests say".
const REVIEWS_SHOWN: usize = 3;

/// Testimonials shown when the highlighted venue has no reviews yet.
const SAMPLE_REVIEWS: [(f64, &str, &str); 3] = [
    (5.0, "An unforgettable experience, stunning views and peaceful atmosphere 🌅", "AmalieTraveler"),
    (4.0, "Lovely host and clean rooms! Great location near the beach 🏖️", "JonasExplorer"),
    (5.0, "The perfect weekend getaway. Beautiful interior and cozy vibe ✨", "MajaAdventurer"),
];

/// Up to three reviews of the highlighted venue, or the sample set when it
/// has none.
pub fn highlight_reviews(reviews: Vec<Review>) -> Vec<Review> {
    if reviews.is_empty() {
        return SAMPLE_REVIEWS
            .iter()
            .enumerate()
            .map(|(i, (rating, description, name))| Review {
                id: format!("sample-{i}"),
                rating: *rating,
                description: (*description).to_owned(),
                user: Some(ReviewAuthor { name: (*name).to_owned() }),
            })
            .collect();
    }
    reviews.into_iter().take(REVIEWS_SHOWN).collect()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();
    let featured = RwSignal::new(Vec::<Venue>::new());
    let reviews = RwSignal::new(Vec::<Review>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());

    spawn(async move {
        match api.venues(Some(FEATURED_LIMIT)).await {
            Ok(list) => {
                let first_id = list.first().map(|v| v.id.clone());
                featured.set(list);
                if let Some(id) = first_id {
                    let embeds = VenueEmbeds { reviews: true, ..VenueEmbeds::default() };
                    match api.venue(&id, embeds).await {
                        Ok(venue) => reviews.set(highlight_reviews(venue.reviews)),
                        Err(e) => log::warn!("reviews for {id} failed: {e}"),
                    }
                }
            }
            Err(e) => {
                log::warn!("featured venues failed: {e}");
                error.set(Some(e.user_message()));
            }
        }
        loading.set(false);
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let query = search.get_untracked();
        let target = if query.trim().is_empty() { "/venues".to_owned() } else { search_href(&query) };
        navigate(&target, NavigateOptions::default());
    };

    view! {
        <section class="home">
            <section class="hero">
                <h1>"Find your next escape"</h1>
                <p>"Unique stays, cozy cabins and city getaways across the world."</p>
                <form class="hero__search" role="search" on:submit=on_search>
                    <input
                        type="text"
                        placeholder="Search destinations..."
                        aria-label="Search destinations"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <button class="button" type="submit">"Explore stays"</button>
                </form>
            </section>
            <section class="featured">
                <h2>"Featured stays"</h2>
                <p class="muted">"Hand-picked getaways loved by our guests."</p>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="page-status">"Loading venues..."</p> }
                >
                    {move || error.get().map(|message| view! { <p class="page-status page-status--error">{message}</p> })}
                    <div class="venue-grid">
                        <For each=move || featured.get() key=|venue| venue.id.clone() let:venue>
                            <VenueCard venue=venue />
                        </For>
                    </div>
                </Show>
            </section>
            <PromoBanner />
            <Show when=move || reviews.with(|r| !r.is_empty())>
                <section class="testimonials">
                    <h2>"What our guests say"</h2>
                    <div class="testimonials__grid">
                        {move || {
                            reviews
                                .get()
                                .into_iter()
                                .map(|review| view! { <ReviewQuote review=review /> })
                                .collect_view()
                        }}
                    </div>
                </section>
            </Show>
        </section>
    }
}
