use super::*;

#[test]
fn log_level_parses_known_names() {
    assert_eq!(parse_log_level(Some("debug")), log::Level::Debug);
    assert_eq!(parse_log_level(Some(" WARN ")), log::Level::Warn);
}

#[test]
fn log_level_defaults_to_info() {
    assert_eq!(parse_log_level(None), log::Level::Info);
    assert_eq!(parse_log_level(Some("chatty")), log::Level::Info);
}

#[test]
fn api_config_has_a_base_url() {
    assert!(api_config().base_url.starts_with("http"));
}
