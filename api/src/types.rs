//! Resource shapes exchanged with the Holidaze API.
//!
//! DESIGN
//! ======
//! Fields mirror the API's camelCase JSON. Everything the API may omit is
//! `Option` or `#[serde(default)]` so partially embedded resources (a booking's
//! venue, a venue without owner) still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An image reference.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Amenity flags advertised by a venue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueMeta {
    #[serde(default)]
    pub wifi: bool,
    #[serde(default)]
    pub parking: bool,
    #[serde(default)]
    pub breakfast: bool,
    #[serde(default)]
    pub pets: bool,
}

impl VenueMeta {
    /// Human labels for the amenities that are switched on, in display order.
    #[must_use]
    pub fn labels(&self) -> Vec<&'static str> {
        [
            (self.wifi, "Wi-Fi"),
            (self.parking, "Parking"),
            (self.breakfast, "Breakfast"),
            (self.pets, "Pets allowed"),
        ]
        .into_iter()
        .filter_map(|(on, label)| on.then_some(label))
        .collect()
    }
}

/// Postal location of a venue. The API spells every field as optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub continent: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

/// Public part of a profile as embedded in venues and bookings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar: Option<Media>,
}

/// Author reference on a review.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewAuthor {
    pub name: String,
}

/// A guest review embedded in a venue.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub user: Option<ReviewAuthor>,
}

/// A bookable venue.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub max_guests: Option<u32>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub media: Vec<Media>,
    #[serde(default)]
    pub meta: VenueMeta,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
}

/// A reservation of a venue for a date range.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    /// ISO-8601 timestamp, e.g. `2024-06-10T00:00:00.000Z`.
    pub date_from: String,
    pub date_to: String,
    #[serde(default)]
    pub guests: u32,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub customer: Option<Owner>,
    #[serde(default)]
    pub venue: Option<Box<Venue>>,
}

/// A user profile as returned by auth and profile endpoints.
///
/// Login responses carry `access_token`; register and profile responses do not.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Media>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<Media>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_manager: Option<bool>,
}

impl Profile {
    /// Role derived from the `venueManager` flag; absent means customer.
    #[must_use]
    pub fn role(&self) -> Role {
        Role::from_manager_flag(self.venue_manager.unwrap_or(false))
    }
}

/// Which side of the marketplace the signed-in user is on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    Manager,
}

impl Role {
    #[must_use]
    pub fn from_manager_flag(venue_manager: bool) -> Self {
        if venue_manager { Self::Manager } else { Self::Customer }
    }

    /// Storage representation (`"customer"` / `"manager"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Manager => "manager",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "customer" => Some(Self::Customer),
            "manager" => Some(Self::Manager),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_manager(self) -> bool {
        matches!(self, Self::Manager)
    }
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub venue_manager: bool,
}

/// Body of `POST /holidaze/venues` and `PUT /holidaze/venues/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenuePayload {
    pub name: String,
    pub description: String,
    pub media: Vec<Media>,
    pub price: f64,
    pub max_guests: u32,
    pub meta: VenueMeta,
    pub location: Location,
}

/// Body of `POST /holidaze/bookings`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub date_from: String,
    pub date_to: String,
    pub guests: u32,
    pub venue_id: String,
}

/// Body of `PUT /holidaze/profiles/{name}`; unset fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_manager: Option<bool>,
}
