//! Site configuration.
//!
//! The configuration is built once at startup, usually from the JSON data
//! island with id [`CONFIG_ISLAND`], and then passed through the
//! [`Scope`](crate::Scope) to anything that needs it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Id of the `<script type="application/json">` element holding the config.
pub const CONFIG_ISLAND: &str = "hearth-config";

/// Name of the `window` property third-party map SDKs read their settings from.
pub const MAPS_GLOBAL: &str = "__hearthMaps";

const DEFAULT_TOAST_TIMEOUT_MS: u32 = 4_000;
const DEFAULT_MAP_STYLE: &str = "streets";
const DEFAULT_MAP_ZOOM: u8 = 12;
const MAX_MAP_ZOOM: u8 = 20;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Staging,
    #[default]
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapsConfig {
    pub api_key: String,
    #[serde(default = "default_map_style")]
    pub style: String,
    #[serde(default = "default_map_zoom")]
    pub default_zoom: u8,
}

fn default_map_style() -> String {
    DEFAULT_MAP_STYLE.to_string()
}

fn default_map_zoom() -> u8 {
    DEFAULT_MAP_ZOOM
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub environment: Environment,
    /// Map integration settings. `None` disables maps.
    pub maps: Option<MapsConfig>,
    /// Auto-dismiss delay for toasts. `None` keeps toasts until dismissed.
    pub toast_timeout_ms: Option<u32>,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            maps: None,
            toast_timeout_ms: Some(DEFAULT_TOAST_TIMEOUT_MS),
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Build the configuration from an optional data island.
    ///
    /// A missing island yields the defaults. An invalid one is logged and
    /// also yields the defaults, so a broken config never blocks a page.
    pub fn resolve(island: Option<&str>) -> Self {
        match island.map(str::trim).filter(|raw| !raw.is_empty()) {
            None => {
                tracing::debug!("no configuration island, using defaults");
                Self::default()
            }
            Some(raw) => Self::from_json(raw).unwrap_or_else(|err| {
                tracing::error!(error = %err, "ignoring invalid configuration");
                Self::default()
            }),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(maps) = &self.maps {
            if maps.api_key.trim().is_empty() {
                return Err(ConfigError::Invalid("maps.api_key must not be empty".into()));
            }
            if !(1..=MAX_MAP_ZOOM).contains(&maps.default_zoom) {
                return Err(ConfigError::Invalid(format!(
                    "maps.default_zoom must be between 1 and {MAX_MAP_ZOOM}, got {}",
                    maps.default_zoom
                )));
            }
        }
        if self.toast_timeout_ms == Some(0) {
            return Err(ConfigError::Invalid(
                "toast_timeout_ms must be positive, use null to disable".into(),
            ));
        }
        if self.log_level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "unknown log_level `{}`",
                self.log_level
            )));
        }
        Ok(())
    }

    pub fn toast_timeout(&self) -> Option<Duration> {
        self.toast_timeout_ms
            .map(|ms| Duration::from_millis(u64::from(ms)))
    }

    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}
