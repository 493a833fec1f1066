//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    OptionalParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::components::routed_page::RoutedPage;
use crate::config::AppConfig;
use crate::pages::{
    about::AboutPage, feedback::FeedbackPage, home::HomePage, login::LoginPage, not_found::NotFoundPage,
    profile::ProfilePage, sends::SendsPage, sessions::SessionsPage, signup::SignupPage, standings::StandingsPage,
    stats::StatsPage,
};
use crate::routes::{AppRoute, DEFAULT_PATH, USERNAME_PARAM};
use crate::util::auth::provide_auth;
use crate::util::flags::provide_flags;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides config, session, and flag contexts and declares the route table.
/// Page views are only built when their route matches.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    provide_context(config.clone());
    provide_auth();
    provide_flags(&config);

    view! {
        <Stylesheet id="leptos" href="/pkg/solo.css"/>
        <Title text="Solo"/>

        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=DEFAULT_PATH/> }/>
                    <Route
                        path=StaticSegment(AppRoute::About.segment())
                        view=|| view! { <RoutedPage route=AppRoute::About><AboutPage/></RoutedPage> }
                    />
                    <Route
                        path=StaticSegment(AppRoute::Login.segment())
                        view=|| view! { <RoutedPage route=AppRoute::Login><LoginPage/></RoutedPage> }
                    />
                    <Route
                        path=StaticSegment(AppRoute::Signup.segment())
                        view=|| view! { <RoutedPage route=AppRoute::Signup><SignupPage/></RoutedPage> }
                    />
                    <Route
                        path=StaticSegment(AppRoute::Home.segment())
                        view=|| view! { <RoutedPage route=AppRoute::Home><HomePage/></RoutedPage> }
                    />
                    <Route
                        path=(StaticSegment("profile"), OptionalParamSegment(USERNAME_PARAM))
                        view=|| {
                            view! {
                                <RoutedPage route=AppRoute::Profile { username: None }>
                                    <ProfilePage/>
                                </RoutedPage>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment(AppRoute::Sends.segment())
                        view=|| view! { <RoutedPage route=AppRoute::Sends><SendsPage/></RoutedPage> }
                    />
                    <Route
                        path=StaticSegment(AppRoute::Sessions.segment())
                        view=|| view! { <RoutedPage route=AppRoute::Sessions><SessionsPage/></RoutedPage> }
                    />
                    <Route
                        path=StaticSegment(AppRoute::Stats.segment())
                        view=|| view! { <RoutedPage route=AppRoute::Stats><StatsPage/></RoutedPage> }
                    />
                    <Route
                        path=StaticSegment(AppRoute::Standings.segment())
                        view=|| view! { <RoutedPage route=AppRoute::Standings><StandingsPage/></RoutedPage> }
                    />
                    <Route
                        path=StaticSegment(AppRoute::Feedback.segment())
                        view=|| view! { <RoutedPage route=AppRoute::Feedback><FeedbackPage/></RoutedPage> }
                    />
                </Routes>
            </Layout>
        </Router>
    }
}
