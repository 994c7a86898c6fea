//! Configuration types for loading simulation scenarios from YAML.
//!
//! Only the host shell is configurable; the physics constants live in
//! [`crate::simulation::params`]. A scenario consists of:
//!
//! - [`WindowConfig`]     – initial frame size in scene units (pixels)
//! - [`ParametersConfig`] – scheduler rate and deterministic seed
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! window:
//!   width: 1280.0
//!   height: 768.0
//!
//! parameters:
//!   tick_hz: 62.5           # steps per second, 16 ms nominal
//!   seed: 42                # optional, omit for an entropy seed
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

/// Initial window / frame size
#[derive(Deserialize, Debug, Clone)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
}

/// Host-facing runtime parameters
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "default_tick_hz")]
    pub tick_hz: f64, // fixed step rate
    #[serde(default)]
    pub seed: Option<u64>, // deterministic seed to make runs reproducible
}

fn default_tick_hz() -> f64 {
    62.5
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub window: WindowConfig,
    pub parameters: ParametersConfig,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_str(s).context("invalid scenario yaml")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let cfg: ScenarioConfig = serde_yaml::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing {}", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.window.width > 0.0 && self.window.height > 0.0,
            "window size must be positive, got {}x{}",
            self.window.width,
            self.window.height
        );
        ensure!(self.parameters.tick_hz > 0.0, "tick_hz must be positive");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_scenario() {
        let cfg = ScenarioConfig::from_yaml_str(
            "window: { width: 800.0, height: 600.0 }\nparameters: { tick_hz: 30.0, seed: 9 }\n",
        )
        .unwrap();
        assert_eq!(cfg.window.width, 800.0);
        assert_eq!(cfg.parameters.tick_hz, 30.0);
        assert_eq!(cfg.parameters.seed, Some(9));
    }

    #[test]
    fn seed_and_rate_are_optional() {
        let cfg =
            ScenarioConfig::from_yaml_str("window: { width: 800.0, height: 600.0 }\nparameters: {}\n")
                .unwrap();
        assert_eq!(cfg.parameters.seed, None);
        assert_eq!(cfg.parameters.tick_hz, 62.5);
    }

    #[test]
    fn rejects_empty_frame() {
        let err = ScenarioConfig::from_yaml_str(
            "window: { width: 0.0, height: 600.0 }\nparameters: {}\n",
        );
        assert!(err.is_err());
    }
}
