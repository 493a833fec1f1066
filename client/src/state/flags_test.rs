use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn production_defaults_only_enable_auth() {
    let flags = FeatureFlags::production_defaults();
    assert!(flags.enable_auth);
    assert!(!flags.enable_stats);
    assert!(!flags.enable_sessions);
    assert!(!flags.enable_feedback);
    assert!(!flags.enable_standings);
    assert!(flags.show_environment_banner);
    assert!(flags.environment_banner_text.contains("@gosolonyc"));
}

#[test]
fn default_is_production() {
    assert_eq!(FeatureFlags::default(), FeatureFlags::production_defaults());
}

#[test]
fn staging_enables_everything() {
    let flags = FeatureFlags::for_environment("staging");
    assert!(flags.enable_stats && flags.enable_sessions && flags.enable_feedback && flags.enable_standings);
    assert_eq!(flags.environment_banner_text, "STAGING environment");
}

#[test]
fn unknown_environment_falls_back_to_production() {
    assert_eq!(FeatureFlags::for_environment("qa-7"), FeatureFlags::production_defaults());
}

// =============================================================
// Wire format
// =============================================================

#[test]
fn decodes_camel_case_and_ignores_unknown_fields() {
    let raw = r#"{"enableStats":true,"enablePro":true,"showEnvironmentBanner":false,"_environment":"dev"}"#;
    let flags: FeatureFlags = serde_json::from_str(raw).unwrap();
    assert!(flags.enable_stats);
    assert!(!flags.show_environment_banner);
}

#[test]
fn missing_fields_take_production_defaults() {
    let flags: FeatureFlags = serde_json::from_str(r#"{"enableFeedback":true}"#).unwrap();
    assert!(flags.enable_feedback);
    assert!(flags.enable_auth);
    assert_eq!(flags.environment_banner_text, PRODUCTION_BANNER_TEXT);
}
