//! Promotional banner on the home page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn PromoBanner() -> impl IntoView {
    view! {
        <section class="promo-banner">
            <div class="promo-banner__text">
                <h2>"Have a place to share?"</h2>
                <p>"Register as a venue manager and start hosting guests from around the world."</p>
            </div>
            <A href="/register" attr:class="button button--light">"Start hosting"</A>
        </section>
    }
}
