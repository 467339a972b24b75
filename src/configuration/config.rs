//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants and the time-scale multiplier
//! - [`EngineConfig`]     – driver options (sub-steps per frame, speed)
//! - [`BodyConfig`]       – identity, constants and initial state of each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:              # optional, defaults shown
//!   G: 6.6743e-11
//!   min_distance: 1.0e7    # pairs closer than this exert no force
//!   time_scale: 10.0       # simulated seconds per unit of elapsed time
//!
//! engine:                  # optional
//!   substeps: 1000         # integrator calls per rendered frame
//!   speed_multiplier: 1.0
//!
//! bodies:
//!   - name: Sun
//!     anchor: true
//!     mass: 1.989e30
//!     radius: 6.9634e8
//!     position: [0.0, 0.0, 0.0]
//!     velocity: [0.0, 0.0, 0.0]
//!     rotation_period: 2.1928e6
//!     texture: sun.jpg
//!   - name: Earth
//!     mass: 5.97237e24
//!     radius: 6.371e6
//!     position: [1.496e11, 0.0, 0.0]
//!     velocity: [0.0, 2.978e4, 0.0]
//!     rotation_period: 86164.0
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::simulation::params::{G, MIN_DISTANCE, TIME_SCALE};

/// Physical and numerical constants
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    #[serde(rename = "G")]
    pub g: f64, // gravitational constant
    pub min_distance: f64, // minimum pair distance for force evaluation, m
    pub time_scale: f64, // elapsed -> simulated seconds multiplier
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            g: G,
            min_distance: MIN_DISTANCE,
            time_scale: TIME_SCALE,
        }
    }
}

/// Driver settings: how a rendered frame maps onto integrator calls
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub substeps: u32, // integrator calls per frame
    pub speed_multiplier: f64, // user-controlled fast forward
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            substeps: 1000,
            speed_multiplier: 1.0,
        }
    }
}

/// Configuration for a single body
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    #[serde(default)]
    pub anchor: bool, // stationary reference body
    pub mass: f64, // kg
    pub radius: f64, // m
    pub position: [f64; 3], // m
    pub velocity: [f64; 3], // m/s
    #[serde(default)]
    pub rotation_period: f64, // s, negative = retrograde, 0 = none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}
