//! Site footer.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__brand">
                <span class="footer__logo">"Holidaze"</span>
                <p>"Find your next stay, or host one."</p>
            </div>
            <nav class="footer__links">
                <A href="/venues">"All venues"</A>
                <A href="/register">"Become a host"</A>
                <A href="/profile">"My bookings"</A>
            </nav>
            <p class="footer__copyright">"© Holidaze"</p>
        </footer>
    }
}
