use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page-status not-found">
            <h1>"404"</h1>
            <p>"We couldn't find that page."</p>
            <A href="/" attr:class="button">"Back to home"</A>
        </section>
    }
}
