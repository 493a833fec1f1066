use super::*;

// =============================================================
// parse_bool
// =============================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", " On "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "No"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_rejects_other_values() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================
// AppConfig
// =============================================================

#[test]
fn defaults_to_development_without_protection() {
    let config = AppConfig::default();
    assert_eq!(config.environment, "development");
    assert!(!config.route_protection);
    assert_eq!(config.log_level, log::Level::Debug);
    assert!(!config.is_production());
}

#[test]
fn production_logs_warnings_only() {
    let config = AppConfig::from_values(Some(" Production "), None, None);
    assert_eq!(config.environment, "production");
    assert!(config.is_production());
    assert_eq!(config.log_level, log::Level::Warn);
}

#[test]
fn explicit_values_override_defaults() {
    let config = AppConfig::from_values(Some("staging"), Some("yes"), Some("info"));
    assert!(config.route_protection);
    assert_eq!(config.log_level, log::Level::Info);
}

#[test]
fn invalid_values_fall_back() {
    let config = AppConfig::from_values(Some("   "), Some("sometimes"), Some("loud"));
    assert_eq!(config.environment, "development");
    assert!(!config.route_protection);
    assert_eq!(config.log_level, log::Level::Debug);
}
