use leptos::prelude::*;

#[component]
pub fn SendsPage() -> impl IntoView {
    view! {
        <section class="page page--sends">
            <h1 class="page__title">"Sends"</h1>
            <p class="page__lead">"Track your climbing progress here"</p>
        </section>
    }
}
