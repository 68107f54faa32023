//! Client-side refinement of a fetched venue list.
//!
//! DESIGN
//! ======
//! Guest filtering and sorting never trigger a request; they run over whatever
//! the last list/search call returned. "Most popular" and "rating" share one
//! comparator because the API exposes no separate popularity signal.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use std::cmp::Ordering;
use std::str::FromStr;

use api::Venue;

/// Guest counts offered by the search form; the last one reads as "5+".
pub const GUEST_CHOICES: [u32; 5] = [1, 2, 3, 4, 5];

/// Ordering applied to the visible venue list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortMode {
    #[default]
    Popular,
    PriceLow,
    PriceHigh,
    Rating,
}

impl SortMode {
    pub const ALL: [Self; 4] = [Self::Popular, Self::PriceLow, Self::PriceHigh, Self::Rating];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Popular => "Most popular",
            Self::PriceLow => "Price: low to high",
            Self::PriceHigh => "Price: high to low",
            Self::Rating => "Rating",
        }
    }

    fn compare(self, a: &Venue, b: &Venue) -> Ordering {
        match self {
            Self::PriceLow => a.price.total_cmp(&b.price),
            Self::PriceHigh => b.price.total_cmp(&a.price),
            Self::Popular | Self::Rating => rating_of(b).total_cmp(&rating_of(a)),
        }
    }
}

/// Error for an unrecognised sort name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort mode `{0}`; expected popular, price-low, price-high or rating")]
pub struct UnknownSortMode(pub String);

impl FromStr for SortMode {
    type Err = UnknownSortMode;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == raw.trim())
            .ok_or_else(|| UnknownSortMode(raw.to_owned()))
    }
}

fn rating_of(venue: &Venue) -> f64 {
    venue.rating.unwrap_or(0.0)
}

/// Whether `venue` can host `guests`. Venues without a capacity always pass.
#[must_use]
pub fn accepts_guests(venue: &Venue, guests: u32) -> bool {
    venue.max_guests.map_or(true, |max| max >= guests)
}

/// Stable in-place sort.
pub fn sort_venues(venues: &mut [Venue], mode: SortMode) {
    venues.sort_by(|a, b| mode.compare(a, b));
}

/// Filter by capacity, then sort, returning a new list.
#[must_use]
pub fn refine(venues: &[Venue], guests: u32, mode: SortMode) -> Vec<Venue> {
    let mut visible: Vec<Venue> = venues.iter().filter(|v| accepts_guests(v, guests)).cloned().collect();
    sort_venues(&mut visible, mode);
    visible
}

/// Parse the guest selector's value; anything unreadable or zero means one.
#[must_use]
pub fn parse_guest_count(raw: &str) -> u32 {
    raw.trim().trim_end_matches('+').parse::<u32>().ok().filter(|n| *n > 0).unwrap_or(1)
}
