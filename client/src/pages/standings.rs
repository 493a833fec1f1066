//! Standings page; visible to everyone, richer for signed-in climbers.

use leptos::prelude::*;

use crate::util::auth::use_auth;

#[component]
pub fn StandingsPage() -> impl IntoView {
    let auth = use_auth();
    let hint = move || {
        if auth.get().authenticated {
            "Your rank is highlighted below."
        } else {
            "Sign in to see where you rank."
        }
    };

    view! {
        <section class="page page--standings">
            <h1 class="page__title">"Standings"</h1>
            <p class="page__lead">{hint}</p>
        </section>
    }
}
