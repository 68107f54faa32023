//! Build-time configuration.
//!
//! The bundle is static, so settings are baked in at compile time:
//!
//! - `HOLIDAZE_API_BASE`: API root, defaults to [`api::DEFAULT_BASE_URL`]
//! - `HOLIDAZE_API_KEY`: value for the API-key header, omitted when unset
//! - `HOLIDAZE_LOG`: console log level (`error` .. `trace`), defaults to `info`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use api::{ApiConfig, DEFAULT_BASE_URL};

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 3_500;

/// Image shown when a venue has no media.
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";

/// Image shown when a user has no avatar.
pub const AVATAR_PLACEHOLDER: &str = "/images/avatar-placeholder.png";

/// Number of venues featured on the home page.
pub const FEATURED_LIMIT: u32 = 3;

/// API endpoint and key for this build.
pub fn api_config() -> ApiConfig {
    ApiConfig::new(
        option_env!("HOLIDAZE_API_BASE").unwrap_or(DEFAULT_BASE_URL),
        option_env!("HOLIDAZE_API_KEY").map(str::to_owned),
    )
}

/// Console log level for this build.
pub fn log_level() -> log::Level {
    parse_log_level(option_env!("HOLIDAZE_LOG"))
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(log::Level::Info)
}
