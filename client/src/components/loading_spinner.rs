//! Spinner shown while a guarded page waits on the session check.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(self) -> &'static str {
        match self {
            Self::Small => "spinner spinner--sm",
            Self::Medium => "spinner spinner--md",
            Self::Large => "spinner spinner--lg",
        }
    }
}

#[component]
pub fn LoadingSpinner(#[prop(optional)] size: SpinnerSize) -> impl IntoView {
    view! {
        <div class="spinner-wrap" role="status" aria-label="Loading">
            <div class=size.class()></div>
        </div>
    }
}
