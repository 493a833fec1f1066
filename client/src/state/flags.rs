//! Feature flags that gate optional sections of the shell.
//!
//! The backend serves flags per environment at `/api/feature-flags`; until
//! (or unless) that answers, the client runs on the offline defaults below.

#[cfg(test)]
#[path = "flags_test.rs"]
mod flags_test;

use serde::{Deserialize, Serialize};

const PRODUCTION_BANNER_TEXT: &str = "Solo is sending soon. Follow @gosolonyc for updates";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureFlags {
    pub enable_auth: bool,
    pub enable_stats: bool,
    pub enable_sessions: bool,
    pub enable_feedback: bool,
    pub enable_standings: bool,
    pub show_environment_banner: bool,
    pub environment_banner_text: String,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self::production_defaults()
    }
}

impl FeatureFlags {
    /// Conservative set used in production and whenever nothing better is known.
    pub fn production_defaults() -> Self {
        Self {
            enable_auth: true,
            enable_stats: false,
            enable_sessions: false,
            enable_feedback: false,
            enable_standings: false,
            show_environment_banner: true,
            environment_banner_text: PRODUCTION_BANNER_TEXT.to_owned(),
        }
    }

    /// Offline defaults for a named environment.
    pub fn for_environment(environment: &str) -> Self {
        match environment {
            "development" | "staging" => Self {
                enable_auth: true,
                enable_stats: true,
                enable_sessions: true,
                enable_feedback: true,
                enable_standings: true,
                show_environment_banner: true,
                environment_banner_text: format!("{} environment", environment.to_uppercase()),
            },
            _ => Self::production_defaults(),
        }
    }
}
