use super::*;

fn all_enabled() -> FeatureFlags {
    FeatureFlags::for_environment("development")
}

// =============================================================
// nav_links
// =============================================================

#[test]
fn production_flags_show_core_links_only() {
    let links = nav_links(&FeatureFlags::production_defaults());
    assert_eq!(links, vec![AppRoute::Profile { username: None }, AppRoute::Sends]);
}

#[test]
fn all_flags_show_every_section_in_order() {
    let titles: Vec<&str> = nav_links(&all_enabled()).iter().map(AppRoute::title).collect();
    assert_eq!(titles, ["Profile", "Sends", "Sessions", "Stats", "Standings", "Feedback"]);
}

#[test]
fn single_flag_adds_single_link() {
    let flags = FeatureFlags { enable_stats: true, ..FeatureFlags::production_defaults() };
    assert_eq!(nav_links(&flags).last(), Some(&AppRoute::Stats));
    assert_eq!(nav_links(&flags).len(), 3);
}

#[test]
fn links_point_at_declared_routes() {
    let hrefs: Vec<String> = nav_links(&all_enabled()).iter().map(AppRoute::href).collect();
    assert_eq!(hrefs, ["/profile", "/sends", "/sessions", "/stats", "/standings", "/feedback"]);
}
