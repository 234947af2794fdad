//! Application configuration types.
//!
//! Contains the serde-backed settings loaded from the TOML config file:
//! gamification tuning, seed-dataset behavior, and path overrides.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Gamification tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamificationConfig {
    /// Points awarded to a donor per recorded donation.
    #[serde(default = "default_donation_points")]
    pub donation_award_points: u32,

    /// Badge granted on a member's first donation.
    #[serde(default = "default_donation_badge")]
    pub donation_badge: String,
}

impl Default for GamificationConfig {
    fn default() -> Self {
        Self {
            donation_award_points: default_donation_points(),
            donation_badge: default_donation_badge(),
        }
    }
}

const fn default_donation_points() -> u32 {
    100
}

fn default_donation_badge() -> String {
    "Generous Donor".to_string()
}

/// Seed-dataset behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Whether commands start from the bundled sample dataset.
    /// When disabled, every command starts from empty collections.
    #[serde(default = "default_seed_enabled")]
    pub enabled: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: default_seed_enabled(),
        }
    }
}

const fn default_seed_enabled() -> bool {
    true
}

/// Path configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Base data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Gamification tuning.
    #[serde(default)]
    pub gamification: GamificationConfig,

    /// Seed-dataset behavior.
    #[serde(default)]
    pub seed: SeedConfig,

    /// Path configuration.
    #[serde(default)]
    pub paths: PathConfig,
}

impl AppConfig {
    /// Get the data directory, using default if not configured.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.paths
            .data_dir
            .clone()
            .unwrap_or_else(Self::default_data_dir)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".alumnilink")
    }

    /// Get the config file path.
    #[must_use]
    pub fn config_file_path(&self) -> PathBuf {
        self.data_dir().join("config.toml")
    }

    /// Get the snapshot exports directory path.
    #[must_use]
    pub fn exports_dir(&self) -> PathBuf {
        self.data_dir().join("exports")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.gamification.donation_award_points, 100);
        assert_eq!(config.gamification.donation_badge, "Generous Donor");
        assert!(config.seed.enabled);
        assert!(config.paths.data_dir.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [gamification]
            donation_award_points = 250
            "#,
        )
        .unwrap();

        assert_eq!(config.gamification.donation_award_points, 250);
        assert_eq!(config.gamification.donation_badge, "Generous Donor");
        assert!(config.seed.enabled);
    }

    #[test]
    fn test_data_dir_override() {
        let config: AppConfig = toml::from_str(
            r#"
            [paths]
            data_dir = "/tmp/alumnilink-test"
            "#,
        )
        .unwrap();

        assert_eq!(config.data_dir(), PathBuf::from("/tmp/alumnilink-test"));
        assert_eq!(
            config.config_file_path(),
            PathBuf::from("/tmp/alumnilink-test/config.toml")
        );
    }
}
