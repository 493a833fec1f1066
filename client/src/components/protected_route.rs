//! Guard wrapper for pages that need a session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::components::loading_spinner::LoadingSpinner;
use crate::config::AppConfig;
use crate::routes::{Access, LOGIN_PATH};
use crate::util::auth::{GuardDecision, guard_decision, use_auth};

/// Renders `children` once [`guard_decision`] allows it; shows a spinner while
/// the session check runs and sends anonymous visitors to `/login`.
#[component]
pub fn ProtectedRoute(access: Access, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let protection_enabled = expect_context::<AppConfig>().route_protection;

    move || match guard_decision(protection_enabled, access, &auth.get()) {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Wait => view! { <LoadingSpinner/> }.into_any(),
        GuardDecision::RedirectToLogin => {
            log::info!("guarded page needs a session, redirecting to {LOGIN_PATH}");
            view! { <Redirect path=LOGIN_PATH options=NavigateOptions { replace: true, ..Default::default() }/> }
                .into_any()
        }
    }
}
