use super::*;
use time::macros::date;

// =============================================================
// stars / labels
// =============================================================

#[test]
fn stars_round_and_clamp() {
    assert_eq!(stars(4.4), "★★★★☆");
    assert_eq!(stars(4.5), "★★★★★");
    assert_eq!(stars(0.0), "☆☆☆☆☆");
    assert_eq!(stars(9.0), "★★★★★");
    assert_eq!(stars(-1.0), "☆☆☆☆☆");
}

#[test]
fn location_label_joins_known_parts() {
    let mut location = Location { city: Some("Bergen".into()), country: Some("Norway".into()), ..Location::default() };
    assert_eq!(location_label(&location), "Bergen, Norway");
    location.city = Some("  ".into());
    assert_eq!(location_label(&location), "Norway");
    assert_eq!(location_label(&Location::default()), "Unknown location");
}

#[test]
fn plural_labels() {
    assert_eq!(guests_label(1), "1 guest");
    assert_eq!(guests_label(4), "4 guests");
    assert_eq!(nights_label(1), "1 night");
    assert_eq!(nights_label(3), "3 nights");
    assert_eq!(price_label(120.0), "$120 / night");
}

// =============================================================
// dates
// =============================================================

#[test]
fn dates_format_short_and_long() {
    assert_eq!(short_date(date!(2024 - 06 - 10)), "10/06/24");
    assert_eq!(long_date(date!(2024 - 06 - 10)), "10 Jun 2024");
    assert_eq!(long_date(date!(2024 - 06 - 01)), "01 Jun 2024");
}

#[test]
fn api_date_label_parses_or_echoes() {
    assert_eq!(api_date_label("2024-06-10T00:00:00.000Z"), "10/06/24");
    assert_eq!(api_date_label("whenever"), "whenever");
}

// =============================================================
// media / gallery
// =============================================================

#[test]
fn primary_image_falls_back_to_placeholder() {
    let venue = Venue { name: "Loft".into(), ..Venue::default() };
    let media = primary_image(&venue);
    assert_eq!(media.url, PLACEHOLDER_IMAGE);
    assert_eq!(alt_text(&media, "x"), "Loft");
}

#[test]
fn alt_text_ignores_blank() {
    let media = Media { url: "u".into(), alt: Some(" ".into()) };
    assert_eq!(alt_text(&media, "Venue photo"), "Venue photo");
}

#[test]
fn cycle_index_wraps_both_ways() {
    assert_eq!(cycle_index(0, 3, true), 1);
    assert_eq!(cycle_index(2, 3, true), 0);
    assert_eq!(cycle_index(0, 3, false), 2);
    assert_eq!(cycle_index(0, 0, true), 0);
}

#[test]
fn description_defaults_when_blank() {
    let mut venue = Venue::default();
    assert_eq!(description_or_default(&venue), "No description provided.");
    venue.description = Some("Sea view".into());
    assert_eq!(description_or_default(&venue), "Sea view");
}

#[test]
fn search_href_encodes_query() {
    assert_eq!(search_href(" Bergen & Oslo "), "/venues?q=Bergen%20%26%20Oslo");
}
