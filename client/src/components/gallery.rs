//! Venue image gallery with cyclic navigation and a lightbox.

use api::Media;
use leptos::prelude::*;

use crate::config::PLACEHOLDER_IMAGE;
use crate::util::format::{alt_text, cycle_index};

#[component]
pub fn Gallery(media: Vec<Media>, venue_name: String) -> impl IntoView {
    let media = if media.is_empty() {
        vec![Media { url: PLACEHOLDER_IMAGE.to_owned(), alt: Some(venue_name.clone()) }]
    } else {
        media
    };
    let len = media.len();
    let media = StoredValue::new(media);
    let venue_name = StoredValue::new(venue_name);
    let index = RwSignal::new(0_usize);
    let lightbox = RwSignal::new(false);

    let current = move || {
        let i = index.get();
        media.with_value(|items| items.get(i).cloned()).unwrap_or_default()
    };
    let current_alt = move || venue_name.with_value(|name| alt_text(&current(), name));
    let step = move |forward: bool| index.update(|i| *i = cycle_index(*i, len, forward));

    view! {
        <div class="gallery">
            <img
                class="gallery__main"
                src=move || current().url
                alt=current_alt
                on:click=move |_| lightbox.set(true)
            />
            <Show when=move || { len > 1 }>
                <button class="gallery__nav gallery__nav--prev" aria-label="Previous image" on:click=move |_| step(false)>
                    "‹"
                </button>
                <button class="gallery__nav gallery__nav--next" aria-label="Next image" on:click=move |_| step(true)>
                    "›"
                </button>
                <p class="gallery__counter">{move || format!("{} / {len}", index.get() + 1)}</p>
            </Show>
            <Show when=move || lightbox.get()>
                <div class="lightbox" on:click=move |_| lightbox.set(false)>
                    <button class="lightbox__close" aria-label="Close image viewer">"×"</button>
                    <Show when=move || { len > 1 }>
                        <button
                            class="lightbox__nav lightbox__nav--prev"
                            aria-label="Previous image"
                            on:click=move |ev: leptos::ev::MouseEvent| {
                                ev.stop_propagation();
                                step(false);
                            }
                        >
                            "‹"
                        </button>
                        <button
                            class="lightbox__nav lightbox__nav--next"
                            aria-label="Next image"
                            on:click=move |ev: leptos::ev::MouseEvent| {
                                ev.stop_propagation();
                                step(true);
                            }
                        >
                            "›"
                        </button>
                    </Show>
                    <img
                        class="lightbox__image"
                        src=move || current().url
                        alt=current_alt
                        on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                    />
                </div>
            </Show>
        </div>
    }
}
