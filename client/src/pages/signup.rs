use leptos::prelude::*;

use crate::components::google_sign_in::GoogleSignInButton;

#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <section class="page page--auth">
            <h1 class="page__title">"Join Solo"</h1>
            <p class="page__lead">"Start tracking your climbing journey"</p>
            <div class="auth-card">
                <GoogleSignInButton/>
                <p class="auth-card__alt">
                    "Already climbing with us? " <a href="/login">"Log in"</a>
                </p>
            </div>
        </section>
    }
}
