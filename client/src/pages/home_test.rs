use super::*;

fn review(id: &str) -> Review {
    Review { id: id.into(), rating: 4.0, description: "Nice".into(), user: None }
}

#[test]
fn venue_without_reviews_gets_sample_testimonials() {
    let shown = highlight_reviews(Vec::new());
    assert_eq!(shown.len(), 3);
    assert_eq!(shown[0].user.as_ref().map(|u| u.name.as_str()), Some("AmalieTraveler"));
    assert!((shown[1].rating - 4.0).abs() < f64::EPSILON);
    assert_ne!(shown[0].id, shown[2].id);
}

#[test]
fn real_reviews_are_capped_at_three() {
    let shown = highlight_reviews(vec![review("a"), review("b"), review("c"), review("d")]);
    let ids: Vec<_> = shown.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn a_single_review_is_kept_as_is() {
    assert_eq!(highlight_reviews(vec![review("only")]), vec![review("only")]);
}
