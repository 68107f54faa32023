use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use super::*;
use crate::request::{ApiResponse, Auth, Method};
use crate::types::{Media, VenueMeta};

// =============================================================
// Fake transport
// =============================================================

/// Replays canned responses by method + path and records every call.
#[derive(Default)]
struct FakeTransport {
    routes: Vec<(Method, String, ApiResponse)>,
    calls: RefCell<Vec<ApiRequest>>,
    events: RefCell<Vec<String>>,
}

impl FakeTransport {
    fn route(mut self, method: Method, path: &str, status: u16, body: serde_json::Value) -> Self {
        self.routes.push((method, path.to_owned(), ApiResponse::new(status, body.to_string())));
        self
    }

    fn calls(&self) -> Vec<ApiRequest> {
        self.calls.borrow().clone()
    }
}

struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

impl Transport for FakeTransport {
    async fn send(&self, _config: &ApiConfig, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        self.calls.borrow_mut().push(request.clone());
        self.events.borrow_mut().push(format!("start {}", request.path));
        YieldOnce(false).await;
        self.events.borrow_mut().push(format!("end {}", request.path));
        self.routes
            .iter()
            .find(|(method, path, _)| *method == request.method && *path == request.path)
            .map(|(_, _, response)| response.clone())
            .ok_or_else(|| ApiError::Transport(format!("no route for {}", request.path)))
    }
}

fn api(transport: FakeTransport) -> HolidazeApi<FakeTransport> {
    HolidazeApi::new(transport, ApiConfig::new("https://api.test", Some("key".to_owned())))
}

fn venue_json(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({ "id": id, "name": name, "price": 100 })
}

// =============================================================
// Auth
// =============================================================

#[tokio::test]
async fn login_posts_credentials_and_decodes_profile() {
    let transport = FakeTransport::default().route(
        Method::Post,
        "/auth/login",
        200,
        serde_json::json!({ "data": {
            "name": "kari", "email": "kari@noroff.no", "accessToken": "tok", "venueManager": true
        }}),
    );
    let api = api(transport);

    let profile = api.login("kari@noroff.no", "secret123").await.expect("login");

    assert_eq!(profile.access_token.as_deref(), Some("tok"));
    let calls = api.transport().calls();
    assert_eq!(calls[0].query, vec![("_holidaze".to_owned(), "true".to_owned())]);
    assert_eq!(calls[0].auth, Auth::Public);
    assert_eq!(
        calls[0].body,
        Some(serde_json::json!({ "email": "kari@noroff.no", "password": "secret123" }))
    );
}

#[tokio::test]
async fn login_surfaces_api_error_message() {
    let transport = FakeTransport::default().route(
        Method::Post,
        "/auth/login",
        401,
        serde_json::json!({ "errors": [{ "message": "Invalid email or password" }] }),
    );

    let err = api(transport).login("a@noroff.no", "wrongpass").await.unwrap_err();

    assert_eq!(err.user_message(), "Invalid email or password");
    assert!(err.is_unauthorized());
}

// =============================================================
// Venues
// =============================================================

#[tokio::test]
async fn browse_without_term_lists_all_venues() {
    let transport = FakeTransport::default().route(
        Method::Get,
        "/holidaze/venues",
        200,
        serde_json::json!({ "data": [venue_json("v1", "A"), venue_json("v2", "B")] }),
    );
    let api = api(transport);

    let venues = api.browse(Some("   ")).await.expect("venues");

    assert_eq!(venues.len(), 2);
    assert_eq!(api.transport().calls()[0].path, "/holidaze/venues");
}

#[tokio::test]
async fn browse_with_term_uses_search_endpoint() {
    let transport = FakeTransport::default().route(
        Method::Get,
        "/holidaze/venues/search",
        200,
        serde_json::json!({ "data": [venue_json("v1", "Oslo loft")] }),
    );
    let api = api(transport);

    let venues = api.browse(Some(" oslo ")).await.expect("venues");

    assert_eq!(venues[0].name, "Oslo loft");
    assert_eq!(api.transport().calls()[0].query, vec![("q".to_owned(), "oslo".to_owned())]);
}

#[tokio::test]
async fn venue_requests_all_embeds() {
    let transport = FakeTransport::default().route(
        Method::Get,
        "/holidaze/venues/v1",
        200,
        serde_json::json!({ "data": venue_json("v1", "A") }),
    );
    let api = api(transport);

    api.venue("v1", VenueEmbeds::all()).await.expect("venue");

    let keys: Vec<String> = api.transport().calls()[0].query.iter().map(|(k, _)| k.clone()).collect();
    assert_eq!(keys, vec!["_owner", "_bookings", "_reviews"]);
}

#[tokio::test]
async fn create_venue_is_authenticated() {
    let transport = FakeTransport::default().route(
        Method::Post,
        "/holidaze/venues",
        201,
        serde_json::json!({ "data": venue_json("v9", "New") }),
    );
    let api = api(transport);
    let payload = VenuePayload {
        name: "New".to_owned(),
        description: "Nice".to_owned(),
        media: vec![Media { url: "https://img.test/a.jpg".to_owned(), alt: Some("New".to_owned()) }],
        price: 100.0,
        max_guests: 2,
        meta: VenueMeta::default(),
        ..VenuePayload::default()
    };

    let venue = api.create_venue("tok", &payload).await.expect("created");

    assert_eq!(venue.id, "v9");
    assert_eq!(api.transport().calls()[0].auth, Auth::Bearer("tok".to_owned()));
}

#[tokio::test]
async fn delete_venue_accepts_empty_no_content_body() {
    let mut transport = FakeTransport::default();
    transport.routes.push((Method::Delete, "/holidaze/venues/v1".to_owned(), ApiResponse::new(204, "")));

    api(transport).delete_venue("tok", "v1").await.expect("deleted");
}

#[tokio::test]
async fn venue_paths_encode_ids() {
    let mut transport = FakeTransport::default().route(
        Method::Get,
        "/holidaze/venues/a%2Fb%20c",
        200,
        serde_json::json!({ "data": venue_json("a/b c", "Odd") }),
    );
    transport.routes.push((Method::Delete, "/holidaze/venues/a%2Fb%20c".to_owned(), ApiResponse::new(204, "")));
    let api = api(transport);

    let venue = api.venue("a/b c", VenueEmbeds::default()).await.expect("venue");
    assert_eq!(venue.id, "a/b c");
    api.delete_venue("tok", "a/b c").await.expect("deleted");
    assert_eq!(api.transport().calls()[1].path, "/holidaze/venues/a%2Fb%20c");
}

#[tokio::test]
async fn transport_failure_is_reported() {
    let err = api(FakeTransport::default()).venues(Some(3)).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

// =============================================================
// Profiles & bookings
// =============================================================

#[tokio::test]
async fn profile_bookings_embed_venue() {
    let transport = FakeTransport::default().route(
        Method::Get,
        "/holidaze/profiles/kari/bookings",
        200,
        serde_json::json!({ "data": [] }),
    );
    let api = api(transport);

    api.profile_bookings("tok", "kari").await.expect("bookings");

    assert_eq!(api.transport().calls()[0].query, vec![("_venue".to_owned(), "true".to_owned())]);
}

#[tokio::test]
async fn profile_paths_encode_names() {
    let transport = FakeTransport::default().route(
        Method::Get,
        "/holidaze/profiles/kari%20nordmann/venues",
        200,
        serde_json::json!({ "data": [] }),
    );

    let venues = api(transport).profile_venues("tok", "kari nordmann").await.expect("venues");
    assert!(venues.is_empty());
}

#[tokio::test]
async fn create_booking_posts_payload() {
    let transport = FakeTransport::default().route(
        Method::Post,
        "/holidaze/bookings",
        201,
        serde_json::json!({ "data": {
            "id": "b1", "dateFrom": "2024-06-10T00:00:00.000Z", "dateTo": "2024-06-12T00:00:00.000Z", "guests": 2
        }}),
    );
    let api = api(transport);
    let booking = NewBooking {
        date_from: "2024-06-10T00:00:00.000Z".to_owned(),
        date_to: "2024-06-12T00:00:00.000Z".to_owned(),
        guests: 2,
        venue_id: "v1".to_owned(),
    };

    let created = api.create_booking("tok", &booking).await.expect("booking");

    assert_eq!(created.id, "b1");
    assert_eq!(api.transport().calls()[0].body.as_ref().and_then(|b| b.get("venueId")).cloned(), Some("v1".into()));
}

#[tokio::test]
async fn dashboard_issues_both_requests_before_either_completes() {
    let transport = FakeTransport::default()
        .route(
            Method::Get,
            "/holidaze/profiles/kari/venues",
            200,
            serde_json::json!({ "data": [venue_json("v1", "A")] }),
        )
        .route(
            Method::Get,
            "/holidaze/profiles/kari/bookings",
            200,
            serde_json::json!({ "data": [] }),
        );
    let api = api(transport);

    let (venues, bookings) = api.dashboard("tok", "kari").await.expect("dashboard");

    assert_eq!(venues.len(), 1);
    assert!(bookings.is_empty());
    let events = api.transport().events.borrow().clone();
    assert_eq!(
        events,
        vec![
            "start /holidaze/profiles/kari/venues",
            "start /holidaze/profiles/kari/bookings",
            "end /holidaze/profiles/kari/venues",
            "end /holidaze/profiles/kari/bookings",
        ]
    );
}

#[tokio::test]
async fn dashboard_fails_when_either_request_fails() {
    let transport = FakeTransport::default().route(
        Method::Get,
        "/holidaze/profiles/kari/venues",
        200,
        serde_json::json!({ "data": [] }),
    );

    assert!(api(transport).dashboard("tok", "kari").await.is_err());
}
