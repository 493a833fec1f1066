//! Build-time client configuration.
//!
//! The WASM bundle has no process environment, so values are baked in at
//! compile time through `option_env!`:
//!
//! - `SOLO_ENV`: `development` (default), `staging`, `production`, ...
//! - `SOLO_ROUTE_PROTECTION`: guard member pages behind the session check
//!   (default off)
//! - `SOLO_LOG_LEVEL`: console log level (default `debug` in development,
//!   `warn` elsewhere)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_ENVIRONMENT: &str = "development";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: String,
    pub route_protection: bool,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("SOLO_ENV"),
            option_env!("SOLO_ROUTE_PROTECTION"),
            option_env!("SOLO_LOG_LEVEL"),
        )
    }

    /// Build a config from raw values; unparseable values fall back to defaults.
    pub fn from_values(environment: Option<&str>, route_protection: Option<&str>, log_level: Option<&str>) -> Self {
        let environment = environment
            .map(|raw| raw.trim().to_ascii_lowercase())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_owned());
        let route_protection = route_protection.and_then(parse_bool).unwrap_or(false);
        let log_level = log_level
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or_else(|| default_log_level(&environment));
        Self { environment, route_protection, log_level }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Accepts `1/true/yes/on` and `0/false/no/off`, trimmed and case-insensitive.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn default_log_level(environment: &str) -> log::Level {
    if environment == DEFAULT_ENVIRONMENT { log::Level::Debug } else { log::Level::Warn }
}
