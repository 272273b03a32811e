//! Layered configuration
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`AGECALC_*` prefix, `__` as separator)
//! 2. `agecalc.toml` in the working directory, or an explicit file
//! 3. Built-in defaults
//!
//! The display profile is the single knob that replaces separate
//! desktop/mobile code paths: it only changes decorative particle counts, how
//! many catalog entries are shown and how often the snapshot is re-sampled.

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "agecalc.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "AGECALC_";

/// Device profile for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayProfile {
    #[default]
    Desktop,
    Compact,
}

/// Concrete presentation parameters derived from a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileSettings {
    pub tick_interval_ms: u64,
    pub background_particles: u32,
    pub confetti_particles: u32,
    pub achievements_shown: usize,
    pub timeline_shown: usize,
}

impl DisplayProfile {
    pub fn settings(&self) -> ProfileSettings {
        match self {
            DisplayProfile::Desktop => ProfileSettings {
                tick_interval_ms: 1000,
                background_particles: 20,
                confetti_particles: 50,
                achievements_shown: 8,
                timeline_shown: 6,
            },
            DisplayProfile::Compact => ProfileSettings {
                tick_interval_ms: 2000,
                background_particles: 8,
                confetti_particles: 25,
                achievements_shown: 4,
                timeline_shown: 4,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AgeConfig {
    #[serde(default)]
    pub profile: DisplayProfile,
    /// Overrides the profile's tick interval
    #[serde(default)]
    pub tick_interval_ms: Option<u64>,
    /// Delay before recomputing after the birth date input changes
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Theme preference, passed through to the presentation layer untouched
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_debounce_ms() -> u64 {
    150
}

fn default_theme() -> String {
    "light".to_string()
}

impl Default for AgeConfig {
    fn default() -> Self {
        Self {
            profile: DisplayProfile::default(),
            tick_interval_ms: None,
            debounce_ms: default_debounce_ms(),
            theme: default_theme(),
        }
    }
}

impl AgeConfig {
    /// Load from defaults, `agecalc.toml` (if present) and the environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment(None))
    }

    /// Load with an explicit configuration file in place of `agecalc.toml`
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::extract(Self::figment(Some(path)))
    }

    /// Build the figment provider chain
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        match path {
            Some(path) => figment = figment.merge(Toml::file(path)),
            None => {
                let local = Path::new(CONFIG_FILE);
                if local.exists() {
                    figment = figment.merge(Toml::file(local));
                }
            }
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "tick_interval_ms".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Profile settings with the tick interval override applied
    pub fn settings(&self) -> ProfileSettings {
        let mut settings = self.profile.settings();
        if let Some(interval) = self.tick_interval_ms {
            settings.tick_interval_ms = interval;
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn default_config_loads() {
        let config = AgeConfig::default();
        assert_eq!(config.profile, DisplayProfile::Desktop);
        assert_eq!(config.debounce_ms, 150);
        assert_eq!(config.theme, "light");
        assert_eq!(config.settings().tick_interval_ms, 1000);
    }

    #[test]
    fn figment_builds_without_files() {
        Jail::expect_with(|_jail| {
            let config = AgeConfig::load().expect("should extract defaults");
            assert_eq!(config, AgeConfig::default());
            Ok(())
        });
    }

    #[test]
    fn compact_profile_from_file() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, "profile = \"compact\"\ntheme = \"dark\"")?;
            let config = AgeConfig::load().expect("config loads");
            assert_eq!(config.profile, DisplayProfile::Compact);
            assert_eq!(config.theme, "dark");
            assert_eq!(config.settings().confetti_particles, 25);
            assert_eq!(config.settings().tick_interval_ms, 2000);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, "tick_interval_ms = 500")?;
            jail.set_env("AGECALC_TICK_INTERVAL_MS", "250");
            let config = AgeConfig::load().expect("config loads");
            assert_eq!(config.settings().tick_interval_ms, 250);
            Ok(())
        });
    }

    #[test]
    fn zero_tick_interval_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("AGECALC_TICK_INTERVAL_MS", "0");
            let err = AgeConfig::load().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { .. }));
            Ok(())
        });
    }
}
