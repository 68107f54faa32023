//! Typed operations over the Holidaze endpoints.
//!
//! Every method is a single request except [`HolidazeApi::dashboard`], which
//! issues two and joins them. Nothing is cached or retried; callers decide how
//! to surface failures.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::request::{ApiConfig, ApiRequest, Transport};
use crate::types::{
    Booking, LoginRequest, NewBooking, Profile, ProfileUpdate, RegisterRequest, Venue, VenuePayload,
};

/// Which related resources to embed when reading a single venue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VenueEmbeds {
    pub owner: bool,
    pub bookings: bool,
    pub reviews: bool,
}

impl VenueEmbeds {
    #[must_use]
    pub fn all() -> Self {
        Self { owner: true, bookings: true, reviews: true }
    }

    fn apply(self, mut request: ApiRequest) -> ApiRequest {
        for (flag, key) in [(self.owner, "_owner"), (self.bookings, "_bookings"), (self.reviews, "_reviews")] {
            if flag {
                request = request.with_query(key, "true");
            }
        }
        request
    }
}

/// Holidaze API bound to a transport and configuration.
#[derive(Clone, Debug)]
pub struct HolidazeApi<T> {
    transport: T,
    config: ApiConfig,
}

impl<T: Transport> HolidazeApi<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn execute<R: DeserializeOwned>(&self, request: ApiRequest, fallback: &str) -> Result<R, ApiError> {
        log::debug!("{} {}", request.method.as_str(), request.path);
        let response = self.transport.send(&self.config, &request).await?;
        if !response.is_success() {
            log::warn!("{} {} -> {}", request.method.as_str(), request.path, response.status);
        }
        response.into_data(fallback)
    }

    /// `POST /auth/login`, asking for the Holidaze profile fields so the
    /// response carries `venueManager`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, rejected credentials, or an
    /// unreadable body.
    pub async fn login(&self, email: &str, password: &str) -> Result<Profile, ApiError> {
        let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let request = ApiRequest::post("/auth/login", serde_json::to_value(&body)?).with_query("_holidaze", "true");
        self.execute(request, "Login failed").await
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the API rejects the registration.
    pub async fn register(&self, body: &RegisterRequest) -> Result<Profile, ApiError> {
        let request = ApiRequest::post("/auth/register", serde_json::to_value(body)?);
        self.execute(request, "Registration failed").await
    }

    /// `GET /holidaze/venues`, optionally limited.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any request failure.
    pub async fn venues(&self, limit: Option<u32>) -> Result<Vec<Venue>, ApiError> {
        let mut request = ApiRequest::get("/holidaze/venues");
        if let Some(limit) = limit {
            request = request.with_query("limit", limit.to_string());
        }
        self.execute(request, "Could not load venues.").await
    }

    /// `GET /holidaze/venues/search?q=`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any request failure.
    pub async fn search_venues(&self, query: &str) -> Result<Vec<Venue>, ApiError> {
        let request = ApiRequest::get("/holidaze/venues/search").with_query("q", query);
        self.execute(request, "Could not load venues.").await
    }

    /// Search when `search` holds a non-blank term, otherwise list everything.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any request failure.
    pub async fn browse(&self, search: Option<&str>) -> Result<Vec<Venue>, ApiError> {
        match search.map(str::trim).filter(|q| !q.is_empty()) {
            Some(query) => self.search_venues(query).await,
            None => self.venues(None).await,
        }
    }

    /// `GET /holidaze/venues/{id}` with the requested embeds.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any request failure.
    pub async fn venue(&self, id: &str, embeds: VenueEmbeds) -> Result<Venue, ApiError> {
        let request = embeds.apply(ApiRequest::get(format!("/holidaze/venues/{}", encode_segment(id))));
        self.execute(request, "Could not load this venue.").await
    }

    /// `POST /holidaze/venues`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any request failure.
    pub async fn create_venue(&self, token: &str, payload: &VenuePayload) -> Result<Venue, ApiError> {
        let request = ApiRequest::post("/holidaze/venues", serde_json::to_value(payload)?).with_bearer(token);
        self.execute(request, "Could not create venue.").await
    }

    /// `PUT /holidaze/venues/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any request failure.
    pub async fn update_venue(&self, token: &str, id: &str, payload: &VenuePayload) -> Result<Venue, ApiError> {
        let path = format!("/holidaze/venues/{}", encode_segment(id));
        let request = ApiRequest::put(path, serde_json::to_value(payload)?).with_bearer(token);
        self.execute(request, "Failed to update venue").await
    }

    /// `DELETE /holidaze/venues/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any request failure.
    pub async fn delete_venue(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let request = ApiRequest::delete(format!("/holidaze/venues/{}", encode_segment(id))).with_bearer(token);
        log::debug!("DELETE {}", request.path);
        let response = self.transport.send(&self.config, &request).await?;
        response.into_unit("Could not delete venue.")
    }

    /// `GET /holidaze/profiles/{name}/venues`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any request failure.
    pub async fn profile_venues(&self, token: &str, name: &str) -> Result<Vec<Venue>, ApiError> {
        let request = ApiRequest::get(format!("/holidaze/profiles/{}/venues", encode_segment(name))).with_bearer(token);
        self.execute(request, "Could not load your venues.").await
    }

    /// `GET /holidaze/profiles/{name}/bookings?_venue=true`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any request failure.
    pub async fn profile_bookings(&self, token: &str, name: &str) -> Result<Vec<Booking>, ApiError> {
        let request = ApiRequest::get(format!("/holidaze/profiles/{}/bookings", encode_segment(name)))
            .with_query("_venue", "true")
            .with_bearer(token);
        self.execute(request, "Failed to fetch bookings").await
    }

    /// `PUT /holidaze/profiles/{name}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any request failure.
    pub async fn update_profile(&self, token: &str, name: &str, update: &ProfileUpdate) -> Result<Profile, ApiError> {
        let request = ApiRequest::put(format!("/holidaze/profiles/{}", encode_segment(name)), serde_json::to_value(update)?)
            .with_bearer(token);
        self.execute(request, "Could not update profile").await
    }

    /// `POST /holidaze/bookings`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any request failure.
    pub async fn create_booking(&self, token: &str, booking: &NewBooking) -> Result<Booking, ApiError> {
        let request = ApiRequest::post("/holidaze/bookings", serde_json::to_value(booking)?).with_bearer(token);
        self.execute(request, "Could not create booking.").await
    }

    /// Manager's venues and bookings, fetched concurrently.
    ///
    /// Both requests are in flight before either completes; the first failure
    /// wins.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`] from either request.
    pub async fn dashboard(&self, token: &str, name: &str) -> Result<(Vec<Venue>, Vec<Booking>), ApiError> {
        futures::future::try_join(self.profile_venues(token, name), self.profile_bookings(token, name)).await
    }
}

fn encode_segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}
