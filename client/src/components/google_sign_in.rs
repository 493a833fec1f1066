//! Google OAuth entry point shared by the login and signup pages.

use leptos::prelude::*;

/// Backend route that starts the Google OAuth flow.
pub const GOOGLE_AUTH_PATH: &str = "/api/auth/google";

/// Full-page link to the OAuth start; the router must not intercept it.
#[component]
pub fn GoogleSignInButton() -> impl IntoView {
    view! {
        <a href=GOOGLE_AUTH_PATH rel="external" class="btn btn--google">
            "Sign in with Google"
        </a>
    }
}
