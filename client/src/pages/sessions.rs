use leptos::prelude::*;

#[component]
pub fn SessionsPage() -> impl IntoView {
    view! {
        <section class="page page--sessions">
            <h1 class="page__title">"Sessions"</h1>
            <p class="page__lead">"Review your time on the wall, session by session."</p>
        </section>
    }
}
