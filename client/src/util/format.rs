//! Display formatting for venues, bookings and dates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use api::{Location, Media, Venue};
use time::Date;
use time::macros::format_description;

use crate::config::PLACEHOLDER_IMAGE;

/// Five-star row for a 0..=5 rating, rounded to whole stars.
pub fn stars(rating: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = rating.clamp(0.0, 5.0).round() as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// "City, Country", falling back to whichever part exists.
pub fn location_label(location: &Location) -> String {
    let parts: Vec<&str> = [location.city.as_deref(), location.country.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() { "Unknown location".to_owned() } else { parts.join(", ") }
}

pub fn guests_label(guests: u32) -> String {
    if guests == 1 { "1 guest".to_owned() } else { format!("{guests} guests") }
}

pub fn nights_label(nights: i64) -> String {
    if nights == 1 { "1 night".to_owned() } else { format!("{nights} nights") }
}

pub fn price_label(price: f64) -> String {
    format!("${price:.0} / night")
}

/// `10/06/24`
pub fn short_date(date: Date) -> String {
    date.format(format_description!("[day]/[month]/[year repr:last_two]")).unwrap_or_default()
}

/// `10 Jun 2024`
pub fn long_date(date: Date) -> String {
    date.format(format_description!("[day] [month repr:short] [year]")).unwrap_or_default()
}

/// Short form of an API timestamp; unparseable input is shown as-is.
pub fn api_date_label(raw: &str) -> String {
    stays::parse_api_date(raw).map_or_else(|| raw.to_owned(), short_date)
}

/// First media item, or the placeholder image.
pub fn primary_image(venue: &Venue) -> Media {
    venue.media.first().cloned().unwrap_or_else(|| Media {
        url: PLACEHOLDER_IMAGE.to_owned(),
        alt: Some(venue.name.clone()),
    })
}

/// Alt text for a media item, defaulting to `fallback`.
pub fn alt_text(media: &Media, fallback: &str) -> String {
    media.alt.clone().filter(|alt| !alt.trim().is_empty()).unwrap_or_else(|| fallback.to_owned())
}

/// Venue list route pre-filled with a search term.
pub fn search_href(query: &str) -> String {
    format!("/venues?q={}", urlencoding::encode(query.trim()))
}

/// Next gallery index, wrapping at both ends.
pub fn cycle_index(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward { (current + 1) % len } else { (current + len - 1) % len }
}

/// Description text, or a stock line when the venue has none.
pub fn description_or_default(venue: &Venue) -> &str {
    venue
        .description
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .unwrap_or("No description provided.")
}
