//! About page, the landing target of `/`.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page page--about">
            <h1 class="page__title">"About Solo"</h1>
            <p class="page__lead">"Solo is your climbing companion."</p>
            <p>"Log your sends and sessions, watch your grades move, and see how you stack up."</p>
        </section>
    }
}
