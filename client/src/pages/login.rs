//! Login page with Google OAuth redirect button.

use leptos::prelude::*;

use crate::components::google_sign_in::GoogleSignInButton;

/// Login page; the button leaves the SPA for the OAuth flow.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <section class="page page--auth">
            <h1 class="page__title">"Login"</h1>
            <div class="auth-card">
                <GoogleSignInButton/>
                <p class="auth-card__alt">
                    "New to Solo? " <a href="/signup">"Create an account"</a>
                </p>
            </div>
        </section>
    }
}
