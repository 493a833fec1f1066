use leptos::prelude::*;

#[component]
pub fn StatsPage() -> impl IntoView {
    view! {
        <section class="page page--stats">
            <h1 class="page__title">"Stats"</h1>
            <p class="page__lead">"Grade pyramid, send rate, and session volume over time."</p>
        </section>
    }
}
