//! Configuration types for the engine and the simulation driver.
//!
//! Every section has defaults, so a TOML document only needs the keys it
//! wants to change:
//!
//! ```toml
//! [engine]
//! gravity = [0.0, 490.0]
//! integration_method = "verlet"
//! air_resistance_coefficient = 0.0
//!
//! [simulation]
//! fixed_timestep = 0.008333333333333333
//! world_width = 800.0
//! world_height = 600.0
//! seed = 7
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::integration::IntegrationMethod;
use crate::world::PhysicsEngine;

/// Physics settings applied to a [`PhysicsEngine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Gravity in px/s², y pointing down.
    pub gravity: [f64; 2],
    pub integration_method: IntegrationMethod,
    pub gravity_enabled: bool,
    pub collisions_enabled: bool,
    pub boundary_enabled: bool,
    /// Quadratic drag coefficient; 0 disables drag.
    pub air_resistance_coefficient: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gravity: PhysicsEngine::DEFAULT_GRAVITY.into(),
            integration_method: IntegrationMethod::default(),
            gravity_enabled: true,
            collisions_enabled: true,
            boundary_enabled: true,
            air_resistance_coefficient: PhysicsEngine::DEFAULT_AIR_RESISTANCE,
        }
    }
}

impl EngineConfig {
    /// Everything that makes energy drift off: no gravity, drag, walls.
    pub fn frictionless() -> Self {
        Self {
            gravity_enabled: false,
            boundary_enabled: false,
            air_resistance_coefficient: 0.0,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.gravity.iter().all(|g| g.is_finite()) {
            return Err(Error::invalid_config("gravity must be finite"));
        }
        if !self.air_resistance_coefficient.is_finite() || self.air_resistance_coefficient < 0.0 {
            return Err(Error::invalid_config(
                "air resistance coefficient cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Settings for the fixed-timestep driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Simulated seconds per physics step.
    pub fixed_timestep: f64,
    /// Frame deltas above this are clamped to avoid a spiral of death.
    pub max_frame_delta: f64,
    /// Multiplier applied to wall-clock time.
    pub simulation_speed: f64,
    pub world_width: f64,
    pub world_height: f64,
    /// Number of energy samples kept.
    pub energy_history_capacity: usize,
    /// Seed for cosmetic randomness (body colours).
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fixed_timestep: 1.0 / 60.0,
            max_frame_delta: 0.1,
            simulation_speed: 1.0,
            world_width: 1280.0,
            world_height: 720.0,
            energy_history_capacity: 300,
            seed: 0x5EED,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.fixed_timestep.is_finite() || self.fixed_timestep <= 0.0 {
            return Err(Error::invalid_config("fixed timestep must be positive"));
        }
        if !self.max_frame_delta.is_finite() || self.max_frame_delta <= 0.0 {
            return Err(Error::invalid_config("max frame delta must be positive"));
        }
        if !self.simulation_speed.is_finite() || self.simulation_speed < 0.0 {
            return Err(Error::invalid_config("simulation speed cannot be negative"));
        }
        if !(self.world_width > 0.0 && self.world_height > 0.0) {
            return Err(Error::invalid_config("world dimensions must be positive"));
        }
        if self.energy_history_capacity == 0 {
            return Err(Error::invalid_config(
                "energy history needs room for at least one sample",
            ));
        }
        Ok(())
    }
}

/// Top-level configuration document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub engine: EngineConfig,
    pub simulation: SimulationConfig,
}

impl Config {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Config = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<()> {
        self.engine.validate()?;
        self.simulation.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.engine.gravity, [0.0, 980.0]);
        assert_eq!(config.engine.integration_method, IntegrationMethod::SemiImplicitEuler);
        assert_relative_eq!(config.simulation.fixed_timestep, 1.0 / 60.0, epsilon = 1e-12);
        assert_eq!(config.simulation.energy_history_capacity, 300);
        assert_eq!(config.simulation.max_frame_delta, 0.1);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [engine]
            integration_method = "verlet"
            gravity = [0.0, 490.0]

            [simulation]
            world_width = 800.0
            seed = 7
            "#,
        )
        .expect("valid document");

        assert_eq!(config.engine.integration_method, IntegrationMethod::Verlet);
        assert_eq!(config.engine.gravity, [0.0, 490.0]);
        assert!(config.engine.collisions_enabled);
        assert_eq!(config.simulation.world_width, 800.0);
        assert_eq!(config.simulation.world_height, 720.0);
        assert_eq!(config.simulation.seed, 7);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml_str("").expect("empty is fine"), Config::default());
    }

    #[test]
    fn test_parse_errors_surface() {
        let err = Config::from_toml_str("[engine]\nintegration_method = \"rk4\"").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.simulation.fixed_timestep = 0.0;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let mut config = Config::default();
        config.simulation.energy_history_capacity = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.simulation.world_height = -1.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.engine.air_resistance_coefficient = -0.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.engine.gravity = [f64::NAN, 0.0];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_values_rejected_on_parse() {
        let err = Config::from_toml_str("[simulation]\nmax_frame_delta = -1.0").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_frictionless_preset() {
        let engine = EngineConfig::frictionless();
        assert!(!engine.gravity_enabled);
        assert!(!engine.boundary_enabled);
        assert_eq!(engine.air_resistance_coefficient, 0.0);
        assert!(engine.collisions_enabled);
    }
}
