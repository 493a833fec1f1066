//! Profile page for `/profile` and `/profile/:username`.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::routes::USERNAME_PARAM;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let params = use_params_map();
    let caption = move || profile_caption(params.read().get(USERNAME_PARAM).as_deref());

    view! {
        <section class="page page--profile">
            <h1 class="page__title">"Profile"</h1>
            <p class="page__lead">{caption}</p>
        </section>
    }
}

fn profile_caption(username: Option<&str>) -> String {
    match username.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => format!("Viewing profile for {name}"),
        None => "Your profile".to_owned(),
    }
}
