//! Wire model and request layer for the Holidaze REST API.
//!
//! This crate owns the JSON representation shared by the browser `client` and
//! the terminal `cli`. HTTP itself stays behind the [`Transport`] trait so each
//! front end can plug in its own stack (`gloo-net` in the browser, `reqwest`
//! on the command line) while request shapes, headers, and error decoding stay
//! in one place.

mod client;
mod error;
mod request;
pub mod types;

pub use client::{HolidazeApi, VenueEmbeds};
pub use error::ApiError;
pub use request::{
    API_KEY_HEADER, ApiConfig, ApiRequest, ApiResponse, Auth, DEFAULT_BASE_URL, Method, Transport,
};
pub use types::{
    Booking, LoginRequest, Location, Media, NewBooking, Owner, Profile, ProfileUpdate, RegisterRequest, Review,
    Role, Venue, VenueMeta, VenuePayload,
};
