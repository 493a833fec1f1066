//! Typed route metadata for the application shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::App` declares the `<Routes>` table with one `StaticSegment` per
//! [`AppRoute`]; the nav bar, the guard, and document titles read labels and
//! access levels from here.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Where `/` sends visitors.
pub const DEFAULT_PATH: &str = "/about";

/// Target of auth redirects.
pub const LOGIN_PATH: &str = "/login";

/// Route parameter carrying the profile owner in `/profile/:username?`.
pub const USERNAME_PARAM: &str = "username";

/// A page reachable through the client-side router.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    About,
    Login,
    Signup,
    Home,
    /// `/profile` (own profile) or `/profile/:username`.
    Profile { username: Option<String> },
    Sends,
    Sessions,
    Stats,
    Standings,
    Feedback,
}

/// How much session the visitor needs before a page renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Renders for everyone, but shows more when signed in.
    Optional,
    Required,
}

impl AppRoute {
    /// Canonical path for links and redirects.
    pub fn href(&self) -> String {
        match self {
            Self::Profile { username: Some(name) } => format!("/profile/{}", urlencoding::encode(name)),
            other => format!("/{}", other.segment()),
        }
    }

    /// Human label used in the nav bar and the document title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Login => "Login",
            Self::Signup => "Sign Up",
            Self::Home => "Home",
            Self::Profile { .. } => "Profile",
            Self::Sends => "Sends",
            Self::Sessions => "Sessions",
            Self::Stats => "Stats",
            Self::Standings => "Standings",
            Self::Feedback => "Feedback",
        }
    }

    pub fn access(&self) -> Access {
        match self {
            Self::Sends | Self::Sessions | Self::Stats | Self::Profile { .. } => Access::Required,
            Self::Standings => Access::Optional,
            Self::About | Self::Login | Self::Signup | Self::Home | Self::Feedback => Access::Public,
        }
    }

    /// First path segment, as declared with `StaticSegment` in the router.
    pub fn segment(&self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Home => "home",
            Self::Profile { .. } => "profile",
            Self::Sends => "sends",
            Self::Sessions => "sessions",
            Self::Stats => "stats",
            Self::Standings => "standings",
            Self::Feedback => "feedback",
        }
    }
}
