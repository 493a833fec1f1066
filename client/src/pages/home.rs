use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="page page--home">
            <h1 class="page__title">"Solo - Quantify your Ascent"</h1>
            <p class="page__lead">"Track your climbing progress and achieve new heights."</p>
        </section>
    }
}
