//! A single guest review.

use api::Review;
use leptos::prelude::*;

use crate::util::format::stars;

#[component]
pub fn ReviewQuote(review: Review) -> impl IntoView {
    let author = review.user.map(|u| u.name).unwrap_or_else(|| "Unknown guest".to_owned());

    view! {
        <blockquote class="review">
            <p>{format!("\"{}\"", review.description)}</p>
            <footer>
                <span class="review__author">{author}</span>
                <span class="review__stars">{stars(review.rating)}</span>
            </footer>
        </blockquote>
    }
}
