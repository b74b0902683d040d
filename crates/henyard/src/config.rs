//! Game configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `henyard.ron` file (if exists)
//! 3. Environment variables prefixed with `HENYARD_`
//!
//! Example environment variable: `HENYARD_REMOTE__URL=http://10.0.0.2:5000/step`

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use henyard_core::settings::SimulationSettings;
use serde::{Deserialize, Serialize};

/// Main game configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameConfig {
    #[serde(default)]
    pub simulation: SimulationSettings,

    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub assets: AssetConfig,

    #[serde(default)]
    pub run: RunConfig,
}

/// Decision service connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Start the background worker
    pub enabled: bool,
    /// Endpoint receiving state reports and answering with goal updates
    pub url: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
    /// How long the worker waits for a report before re-checking shutdown
    pub poll_timeout_ms: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: "http://127.0.0.1:5000/step".to_string(),
            timeout_ms: 500,
            poll_timeout_ms: 50,
        }
    }
}

/// Model files and level layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Directory containing `robot/` and `gallina/` model folders
    pub model_root: String,
    /// RON level layout; the built-in farm when unset
    pub level: Option<String>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            model_root: "obj".to_string(),
            level: None,
        }
    }
}

/// Headless run settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Ticks to simulate
    pub ticks: u64,
    /// Simulated ticks per second when pacing in real time
    pub tick_rate: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ticks: 3600,
            tick_rate: 60,
        }
    }
}

impl GameConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `henyard.ron` file (if exists)
    /// 3. Environment variables prefixed with `HENYARD_` (highest priority)
    pub fn load() -> Result<Self> {
        let builder = Self::defaults()?
            // Layer 2: Config file (optional, won't error if missing)
            .add_source(
                File::with_name("henyard")
                    .format(FileFormat::Ron)
                    .required(false),
            );

        Self::finish(builder)
    }

    /// Same layering, but with an explicit config file that must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let builder = Self::defaults()?.add_source(File::from(path).format(FileFormat::Ron));
        Self::finish(builder)
    }

    // Layer 1: Compiled defaults. Simulation tunables fall back to their
    // serde defaults, so only the top-level sections are listed here.
    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        let remote = RemoteConfig::default();
        let assets = AssetConfig::default();
        let run = RunConfig::default();

        Ok(Config::builder()
            .set_default("remote.enabled", remote.enabled)?
            .set_default("remote.url", remote.url)?
            .set_default("remote.timeout_ms", remote.timeout_ms as i64)?
            .set_default("remote.poll_timeout_ms", remote.poll_timeout_ms as i64)?
            .set_default("assets.model_root", assets.model_root)?
            .set_default("run.ticks", run.ticks as i64)?
            .set_default("run.tick_rate", i64::from(run.tick_rate))?)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        // Layer 3: Environment variables (HENYARD_REMOTE__URL, etc.)
        let builder = builder.add_source(
            Environment::with_prefix("HENYARD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use henyard_core::settings::PickupRule;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert!(!config.remote.enabled);
        assert_eq!(config.remote.timeout_ms, 500);
        assert_eq!(config.assets.model_root, "obj");
        assert_eq!(config.run.tick_rate, 60);
        assert_eq!(config.simulation.robot.speed, 0.5);
    }

    #[test]
    fn test_load_config_with_defaults() {
        // Should load defaults when no config file exists
        let config = GameConfig::load().expect("Failed to load config");
        assert_eq!(config.remote.poll_timeout_ms, 50);
        assert_eq!(config.simulation.capture.pickup_radius, 8.0);
    }

    #[test]
    fn test_load_config_file_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("henyard.ron");
        fs::write(
            &path,
            r#"(
                remote: (enabled: true, url: "http://localhost:9000/step"),
                simulation: (capture: (pickup_rule: "nearest", drop_radius: 15.0)),
            )"#,
        )
        .unwrap();

        let config = GameConfig::load_from(&path).expect("Failed to load config");
        assert!(config.remote.enabled);
        assert_eq!(config.remote.url, "http://localhost:9000/step");
        // Untouched keys keep their defaults
        assert_eq!(config.remote.timeout_ms, 500);
        assert_eq!(config.simulation.capture.pickup_rule, PickupRule::Nearest);
        assert_eq!(config.simulation.capture.drop_radius, 15.0);
        assert_eq!(config.simulation.capture.pickup_radius, 8.0);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(GameConfig::load_from(&dir.path().join("nope.ron")).is_err());
    }
}
