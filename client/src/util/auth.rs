//! Auth hook and route-guard rules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` calls [`provide_auth`] once; everything below reads the session via
//! [`use_auth`]. Guarded pages apply identical redirect behavior through
//! [`guard_decision`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::routes::Access;
use crate::state::auth::AuthState;

/// Create the session signal in its loading state, provide it as context,
/// and (in the browser) fire the one session check that settles it.
pub fn provide_auth() -> RwSignal<AuthState> {
    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::check_auth().await;
        auth.update(|state| {
            state.settle(outcome);
        });
        log::debug!("session check settled, authenticated={}", auth.get_untracked().authenticated);
    });

    auth
}

/// Session signal provided by [`provide_auth`].
pub fn use_auth() -> RwSignal<AuthState> {
    expect_context::<RwSignal<AuthState>>()
}

/// What a guarded page should do right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// Session check still in flight.
    Wait,
    RedirectToLogin,
}

/// Decide how a page with `access` renders for the current session.
pub fn guard_decision(protection_enabled: bool, access: Access, state: &AuthState) -> GuardDecision {
    if !protection_enabled || access != Access::Required {
        return GuardDecision::Render;
    }
    if state.loading {
        GuardDecision::Wait
    } else if state.authenticated {
        GuardDecision::Render
    } else {
        GuardDecision::RedirectToLogin
    }
}
