use super::*;

fn venue(id: &str, price: f64, rating: Option<f64>, max_guests: Option<u32>) -> Venue {
    Venue { id: id.to_owned(), name: id.to_owned(), price, rating, max_guests, ..Venue::default() }
}

fn ids(venues: &[Venue]) -> Vec<&str> {
    venues.iter().map(|v| v.id.as_str()).collect()
}

fn sample() -> Vec<Venue> {
    vec![
        venue("cheap", 50.0, Some(3.0), Some(2)),
        venue("mid", 120.0, Some(5.0), Some(6)),
        venue("pricey", 400.0, Some(4.0), None),
        venue("unrated", 80.0, None, Some(4)),
    ]
}

// =============================================================
// Guest filter
// =============================================================

#[test]
fn venues_below_requested_capacity_are_excluded() {
    let visible = refine(&sample(), 3, SortMode::PriceLow);
    assert_eq!(ids(&visible), vec!["unrated", "mid", "pricey"]);
}

#[test]
fn venues_without_capacity_always_pass() {
    let visible = refine(&sample(), 50, SortMode::Popular);
    assert_eq!(ids(&visible), vec!["pricey"]);
}

#[test]
fn zero_capacity_is_a_defined_limit() {
    assert!(!accepts_guests(&venue("x", 1.0, None, Some(0)), 1));
}

#[test]
fn exact_capacity_is_accepted() {
    assert!(accepts_guests(&venue("x", 1.0, None, Some(4)), 4));
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn price_low_and_high_are_reverse_orders_for_distinct_prices() {
    let low = refine(&sample(), 1, SortMode::PriceLow);
    let mut high = refine(&sample(), 1, SortMode::PriceHigh);
    high.reverse();
    assert_eq!(ids(&low), ids(&high));
}

#[test]
fn popular_and_rating_sort_identically() {
    let popular = refine(&sample(), 1, SortMode::Popular);
    let rating = refine(&sample(), 1, SortMode::Rating);
    assert_eq!(ids(&popular), vec!["mid", "pricey", "cheap", "unrated"]);
    assert_eq!(ids(&popular), ids(&rating));
}

#[test]
fn sort_is_stable_for_ties() {
    let mut venues = vec![venue("a", 10.0, Some(4.0), None), venue("b", 10.0, Some(4.0), None)];
    sort_venues(&mut venues, SortMode::PriceHigh);
    assert_eq!(ids(&venues), vec!["a", "b"]);
    sort_venues(&mut venues, SortMode::Rating);
    assert_eq!(ids(&venues), vec!["a", "b"]);
}

#[test]
fn refine_leaves_input_untouched() {
    let input = sample();
    let _ = refine(&input, 1, SortMode::PriceHigh);
    assert_eq!(ids(&input), vec!["cheap", "mid", "pricey", "unrated"]);
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn sort_mode_parses_its_own_names() {
    for mode in SortMode::ALL {
        assert_eq!(mode.as_str().parse::<SortMode>(), Ok(mode));
    }
    assert!("cheapest".parse::<SortMode>().is_err());
}

#[test]
fn guest_count_parsing() {
    assert_eq!(parse_guest_count("3"), 3);
    assert_eq!(parse_guest_count("5+"), 5);
    assert_eq!(parse_guest_count(""), 1);
    assert_eq!(parse_guest_count("0"), 1);
    assert_eq!(parse_guest_count("lots"), 1);
}
