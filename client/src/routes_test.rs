use super::*;

const ALL: [AppRoute; 10] = [
    AppRoute::About,
    AppRoute::Login,
    AppRoute::Signup,
    AppRoute::Home,
    AppRoute::Profile { username: None },
    AppRoute::Sends,
    AppRoute::Sessions,
    AppRoute::Stats,
    AppRoute::Standings,
    AppRoute::Feedback,
];

// =============================================================
// href
// =============================================================

#[test]
fn static_hrefs_are_root_relative_segments() {
    for route in ALL {
        assert_eq!(route.href(), format!("/{}", route.segment()));
    }
}

#[test]
fn profile_href_encodes_username() {
    let route = AppRoute::Profile { username: Some("a b/c".to_owned()) };
    assert_eq!(route.href(), "/profile/a%20b%2Fc");
}

#[test]
fn default_and_login_paths_are_declared_routes() {
    assert_eq!(AppRoute::About.href(), DEFAULT_PATH);
    assert_eq!(AppRoute::Login.href(), LOGIN_PATH);
}

#[test]
fn segments_are_unique_and_lowercase() {
    let mut seen = std::collections::HashSet::new();
    for route in ALL {
        let segment = route.segment();
        assert!(seen.insert(segment), "duplicate segment {segment}");
        assert_eq!(segment, segment.to_lowercase());
    }
}

// =============================================================
// metadata
// =============================================================

#[test]
fn access_levels() {
    assert_eq!(AppRoute::Sends.access(), Access::Required);
    assert_eq!(AppRoute::Sessions.access(), Access::Required);
    assert_eq!(AppRoute::Stats.access(), Access::Required);
    assert_eq!(AppRoute::Profile { username: None }.access(), Access::Required);
    assert_eq!(AppRoute::Standings.access(), Access::Optional);
    assert_eq!(AppRoute::About.access(), Access::Public);
    assert_eq!(AppRoute::Login.access(), Access::Public);
    assert_eq!(AppRoute::Feedback.access(), Access::Public);
}

#[test]
fn titles_are_human_labels() {
    assert_eq!(AppRoute::Signup.title(), "Sign Up");
    assert_eq!(AppRoute::Profile { username: Some("x".to_owned()) }.title(), "Profile");
}
