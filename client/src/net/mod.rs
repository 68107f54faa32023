//! Networking for the browser client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` adapts `gloo-net` to [`api::Transport`]; pages talk to the API
//! through the [`Api`] handle provided at the application root.

pub mod transport;

use api::HolidazeApi;
use leptos::prelude::expect_context;

use crate::config;
pub use transport::BrowserTransport;

/// API handle used by every page.
pub type Api = HolidazeApi<BrowserTransport>;

/// Build the API handle from build-time configuration.
pub fn make_api() -> Api {
    HolidazeApi::new(BrowserTransport, config::api_config())
}

/// API handle from context.
pub fn use_api() -> Api {
    expect_context::<Api>()
}

/// Run a request future on the browser event loop. Native builds have no
/// event loop, so the future is dropped unpolled.
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(future);
    #[cfg(not(feature = "csr"))]
    drop(future);
}
