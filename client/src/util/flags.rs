//! Feature-flag context provider.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::state::flags::FeatureFlags;

/// Provide flags for `config.environment`, starting from the offline
/// defaults and, in the browser, replacing them once the backend answers.
pub fn provide_flags(config: &AppConfig) -> RwSignal<FeatureFlags> {
    let flags = RwSignal::new(FeatureFlags::for_environment(&config.environment));
    provide_context(flags);

    #[cfg(feature = "hydrate")]
    {
        let environment = config.environment.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_feature_flags(&environment).await {
                Ok(fetched) => flags.set(fetched),
                Err(e) => log::warn!("feature flags unavailable, using defaults: {e}"),
            }
        });
    }

    flags
}

pub fn use_flags() -> RwSignal<FeatureFlags> {
    expect_context::<RwSignal<FeatureFlags>>()
}
