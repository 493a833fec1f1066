//! Generic 404 page for paths outside the route table.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::util::navigation::history_back;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    let navigate = use_navigate();
    let on_home = move |_: leptos::ev::MouseEvent| navigate("/", NavigateOptions::default());

    view! {
        <section class="page page--not-found">
            <h1 class="not-found__code">"404"</h1>
            <h2 class="not-found__title">"Off Route!"</h2>
            <p class="page__lead">
                "Looks like you've climbed off-route! The beta you're looking for isn't here."
            </p>
            <div class="not-found__actions">
                <button class="btn btn--primary" on:click=move |_| history_back()>
                    "Back"
                </button>
                <button class="btn" on:click=on_home>
                    "Home"
                </button>
            </div>
        </section>
    }
}
