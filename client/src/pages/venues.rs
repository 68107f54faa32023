//! Venue list with search, guest filter and sorting.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the search term triggers a request (`browse`). Guest count and sort
//! order are applied to the loaded list with `stays::refine` and never hit
//! the network. `?q=` pre-fills and runs the initial search.

use api::Venue;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_query_map;
use stays::listing::{GUEST_CHOICES, parse_guest_count};
use stays::{SortMode, refine};

use crate::components::venue_card::VenueCard;
use crate::net::{spawn, use_api};
use crate::util::format::guests_label;

const DEFAULT_GUESTS: u32 = 2;

#[component]
pub fn VenuesPage() -> impl IntoView {
    let api = use_api();
    let query = use_query_map();

    let search = RwSignal::new(String::new());
    let guests = RwSignal::new(DEFAULT_GUESTS);
    let sort = RwSignal::new(SortMode::default());
    let venues = RwSignal::new(Vec::<Venue>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let fetch = move |term: Option<String>| {
        loading.set(true);
        error.set(None);
        let api = api.clone();
        spawn(async move {
            match api.browse(term.as_deref()).await {
                Ok(list) => venues.set(list),
                Err(e) => {
                    log::warn!("venue list failed: {e}");
                    error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    };

    {
        let fetch = fetch.clone();
        Effect::new(move || {
            let term = query.with(|q| q.get("q")).filter(|q| !q.trim().is_empty());
            search.set(term.clone().unwrap_or_default());
            fetch(term);
        });
    }

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let term = search.get_untracked().trim().to_owned();
        fetch(Some(term).filter(|t| !t.is_empty()));
    };

    let shown = Memo::new(move |_| venues.with(|list| refine(list, guests.get(), sort.get())));

    view! {
        <section class="venues-page">
            <form class="venue-filters" on:submit=on_search>
                <label class="field">
                    <span>"Search destinations"</span>
                    <input
                        type="text"
                        placeholder="Search destinations..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Guests"</span>
                    <select on:change=move |ev| guests.set(parse_guest_count(&event_target_value(&ev)))>
                        {GUEST_CHOICES
                            .iter()
                            .map(|&n| {
                                let label = if n == GUEST_CHOICES[GUEST_CHOICES.len() - 1] {
                                    format!("{n}+ guests")
                                } else {
                                    guests_label(n)
                                };
                                view! { <option value=n.to_string() selected=move || guests.get() == n>{label}</option> }
                            })
                            .collect_view()}
                    </select>
                </label>
                <button class="button" type="submit">"Search"</button>
            </form>
            <div class="sort-bar">
                <span>"Sort by"</span>
                {SortMode::ALL
                    .iter()
                    .map(|&mode| view! {
                        <button
                            type="button"
                            class="sort-bar__option"
                            class:sort-bar__option--active=move || sort.get() == mode
                            on:click=move |_| sort.set(mode)
                        >
                            {mode.label()}
                        </button>
                    })
                    .collect_view()}
            </div>
            {move || {
                if loading.get() {
                    return view! { <p class="page-status">"Loading venues..."</p> }.into_any();
                }
                if let Some(message) = error.get() {
                    return view! { <p class="page-status page-status--error">{message}</p> }.into_any();
                }
                let list = shown.get();
                if list.is_empty() {
                    return view! { <p class="page-status">"No venues found. Try adjusting your search."</p> }.into_any();
                }
                view! {
                    <div class="venue-grid">
                        {list.into_iter().map(|venue| view! { <VenueCard venue=venue /> }).collect_view()}
                    </div>
                }
                .into_any()
            }}
        </section>
    }
}
