//! Availability configuration.

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

/// Environment variable read by [`AvailabilityConfig::from_env`].
pub const DEFAULT_CHECK_BUNDLE_ITEM_FLAG_ENV: &str = "STOREFRONT_DEFAULT_CHECK_BUNDLE_ITEM_FLAG";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityConfig {
    /// Check component skus of bundles that do not say how their inventory is tracked.
    pub default_check_bundle_item_inventory: bool,
}

impl AvailabilityConfig {
    pub fn with_default_check_bundle_item_inventory(mut self, enabled: bool) -> Self {
        self.default_check_bundle_item_inventory = enabled;
        self
    }

    /// Load from the process environment. A missing variable keeps the default (`false`).
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` in place of the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Some(raw) = lookup(DEFAULT_CHECK_BUNDLE_ITEM_FLAG_ENV) {
            config.default_check_bundle_item_inventory = parse_flag(&raw)
                .with_context(|| format!("invalid {DEFAULT_CHECK_BUNDLE_ITEM_FLAG_ENV}"))?;
        }
        Ok(config)
    }
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => bail!("expected one of true/false/1/0, got `{other}`"),
    }
}
