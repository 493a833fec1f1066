//! Page chrome shared by every route.

use leptos::prelude::*;

use crate::components::nav::NavBar;
use crate::util::flags::use_flags;

/// Banner, header with nav, routed content, and footer.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let flags = use_flags();

    let banner = move || {
        let flags = flags.get();
        flags.show_environment_banner.then(|| {
            view! { <div class="env-banner">{flags.environment_banner_text}</div> }
        })
    };

    view! {
        <div class="layout">
            {banner}
            <header class="layout__header">
                <NavBar/>
            </header>
            <main class="layout__main">{children()}</main>
            <Footer/>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="layout__footer">
            <p>"Solo \u{b7} Quantify your Ascent"</p>
        </footer>
    }
}
