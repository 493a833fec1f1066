//! Top navigation bar with brand, section links, and account slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! Link visibility follows the feature flags. Links are router `<A>`
//! elements, so the one matching the current location carries
//! `aria-current="page"` and navigation stays client-side.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::{AppRoute, LOGIN_PATH};
use crate::state::flags::FeatureFlags;
use crate::util::auth::use_auth;
use crate::util::flags::use_flags;

/// Navigation bar rendered in the layout header.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = use_auth();
    let flags = use_flags();

    let links = move || {
        nav_links(&flags.get())
            .into_iter()
            .map(|route| {
                view! {
                    <A href=route.href() attr:class="nav__link">
                        {route.title()}
                    </A>
                }
            })
            .collect::<Vec<_>>()
    };

    let account = move || {
        let state = auth.get();
        match state.username() {
            Some(name) => view! { <span class="nav__user">{name.to_owned()}</span> }.into_any(),
            None if state.loading => view! { <span class="nav__user nav__user--pending"></span> }.into_any(),
            None => view! {
                <A href=LOGIN_PATH attr:class="nav__link">
                    "Login"
                </A>
            }
            .into_any(),
        }
    };

    view! {
        <nav class="nav">
            <A href="/" attr:class="nav__brand">
                "Solo"
            </A>
            <div class="nav__links">{links}</div>
            <div class="nav__account">{account}</div>
        </nav>
    }
}

/// Sections shown in the nav bar, in display order.
///
/// Profile and Sends are always present; the rest follow their flags.
pub fn nav_links(flags: &FeatureFlags) -> Vec<AppRoute> {
    let gated = [
        (flags.enable_sessions, AppRoute::Sessions),
        (flags.enable_stats, AppRoute::Stats),
        (flags.enable_standings, AppRoute::Standings),
        (flags.enable_feedback, AppRoute::Feedback),
    ];
    [AppRoute::Profile { username: None }, AppRoute::Sends]
        .into_iter()
        .chain(gated.into_iter().filter_map(|(enabled, route)| enabled.then_some(route)))
        .collect()
}
