//! Venue create/edit form.
//!
//! DESIGN
//! ======
//! One component serves both pages: callers pass the initial values and a
//! submit callback. Field values stay as raw strings in [`VenueFormValues`]
//! until submit, where [`VenueFormValues::to_payload`] validates and converts
//! them; the component never talks to the API itself.

#[cfg(test)]
#[path = "venue_form_test.rs"]
mod venue_form_test;

use api::{Location, Media, Venue, VenueMeta, VenuePayload};
use leptos::prelude::*;

/// Raw form fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VenueFormValues {
    pub name: String,
    pub description: String,
    pub media_url: String,
    pub price: String,
    pub max_guests: String,
    /// Free text, "city, country".
    pub location: String,
    pub meta: VenueMeta,
}

impl VenueFormValues {
    /// Prefill from an existing venue.
    pub fn from_venue(venue: &Venue) -> Self {
        let location = [venue.location.city.as_deref(), venue.location.country.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            name: venue.name.clone(),
            description: venue.description.clone().unwrap_or_default(),
            media_url: venue.media.first().map(|m| m.url.clone()).unwrap_or_default(),
            price: format_number(venue.price),
            max_guests: venue.max_guests.map(|max| max.to_string()).unwrap_or_default(),
            location,
            meta: venue.meta,
        }
    }

    /// Validate and build the request body.
    ///
    /// # Errors
    ///
    /// A user-facing message for the first invalid field.
    pub fn to_payload(&self) -> Result<VenuePayload, &'static str> {
        let name = self.name.trim();
        let description = self.description.trim();
        if name.is_empty() || description.is_empty() || self.price.trim().is_empty() || self.max_guests.trim().is_empty()
        {
            return Err("Please fill in all required fields.");
        }
        let price: f64 = self.price.trim().parse().map_err(|_| "Price must be a number.")?;
        if !price.is_finite() || price < 0.0 {
            return Err("Price cannot be negative.");
        }
        let max_guests: u32 = self.max_guests.trim().parse().map_err(|_| "Max guests must be a whole number.")?;
        if max_guests == 0 {
            return Err("Max guests must be at least 1.");
        }
        let media_url = self.media_url.trim();
        let media = if media_url.is_empty() {
            Vec::new()
        } else {
            vec![Media { url: media_url.to_owned(), alt: Some(name.to_owned()) }]
        };
        Ok(VenuePayload {
            name: name.to_owned(),
            description: description.to_owned(),
            media,
            price,
            max_guests,
            meta: self.meta,
            location: parse_location(&self.location),
        })
    }
}

/// "city, country": the first two comma-separated parts. Anything after a
/// second comma is ignored; missing parts stay `None`.
pub fn parse_location(raw: &str) -> Location {
    let non_empty = |part: &str| Some(part.trim().to_owned()).filter(|p| !p.is_empty());
    let mut parts = raw.split(',');
    let city = parts.next().and_then(non_empty);
    let country = parts.next().and_then(non_empty);
    Location { city, country, ..Location::default() }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 { format!("{value:.0}") } else { value.to_string() }
}

#[component]
pub fn VenueForm(
    initial: VenueFormValues,
    #[prop(into)] submit_label: String,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    on_submit: Callback<VenuePayload>,
) -> impl IntoView {
    let values = RwSignal::new(initial);
    let invalid = RwSignal::new(None::<&'static str>);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match values.with_untracked(VenueFormValues::to_payload) {
            Ok(payload) => {
                invalid.set(None);
                on_submit.run(payload);
            }
            Err(message) => invalid.set(Some(message)),
        }
    };

    let message = move || invalid.get().map(str::to_owned).or_else(|| error.get());

    view! {
        <form class="venue-form" on:submit=on_form_submit>
            <label class="field">
                <span>"Name *"</span>
                <input
                    type="text"
                    prop:value=move || values.with(|v| v.name.clone())
                    on:input=move |ev| values.update(|v| v.name = event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span>"Description *"</span>
                <textarea
                    rows="5"
                    prop:value=move || values.with(|v| v.description.clone())
                    on:input=move |ev| values.update(|v| v.description = event_target_value(&ev))
                ></textarea>
            </label>
            <label class="field">
                <span>"Image URL"</span>
                <input
                    type="url"
                    placeholder="https://"
                    prop:value=move || values.with(|v| v.media_url.clone())
                    on:input=move |ev| values.update(|v| v.media_url = event_target_value(&ev))
                />
            </label>
            <div class="field-row">
                <label class="field">
                    <span>"Price per night *"</span>
                    <input
                        type="number"
                        min="0"
                        prop:value=move || values.with(|v| v.price.clone())
                        on:input=move |ev| values.update(|v| v.price = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Max guests *"</span>
                    <input
                        type="number"
                        min="1"
                        prop:value=move || values.with(|v| v.max_guests.clone())
                        on:input=move |ev| values.update(|v| v.max_guests = event_target_value(&ev))
                    />
                </label>
            </div>
            <label class="field">
                <span>"Location"</span>
                <input
                    type="text"
                    placeholder="City, Country"
                    prop:value=move || values.with(|v| v.location.clone())
                    on:input=move |ev| values.update(|v| v.location = event_target_value(&ev))
                />
            </label>
            <fieldset class="venue-form__amenities">
                <legend>"Amenities"</legend>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || values.with(|v| v.meta.wifi)
                        on:change=move |ev| values.update(|v| v.meta.wifi = event_target_checked(&ev))
                    />
                    "Wi-Fi"
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || values.with(|v| v.meta.parking)
                        on:change=move |ev| values.update(|v| v.meta.parking = event_target_checked(&ev))
                    />
                    "Parking"
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || values.with(|v| v.meta.breakfast)
                        on:change=move |ev| values.update(|v| v.meta.breakfast = event_target_checked(&ev))
                    />
                    "Breakfast"
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || values.with(|v| v.meta.pets)
                        on:change=move |ev| values.update(|v| v.meta.pets = event_target_checked(&ev))
                    />
                    "Pets allowed"
                </label>
            </fieldset>
            <Show when=move || message().is_some()>
                <p class="form-error">{move || message().unwrap_or_default()}</p>
            </Show>
            <button class="button" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Saving...".to_owned() } else { submit_label.clone() }}
            </button>
        </form>
    }
}
