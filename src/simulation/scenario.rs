//! Scenario constructor: the fixed starting catalog a registry is reset to
//!
//! A `Scenario` wraps a `ScenarioConfig` (YAML-facing or built in) and knows
//! how to turn it into runtime pieces:
//! - validated `Body` list for `BodyRegistry::reset`
//! - numerical `Parameters`
//! - the active force set (`AccelSet`)
//!
//! Building is all-or-nothing; the first invalid body aborts the whole catalog.

use std::path::Path;

use crate::configuration::config::{BodyConfig, EngineConfig, ParametersConfig, ScenarioConfig};
use crate::error::{Result, SimError};
use crate::simulation::forces::AccelSet;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3};

const DAY: f64 = 86_400.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    config: ScenarioConfig,
}

impl Scenario {
    /// Wrap a config, checking parameters and every body up front so later
    /// resets cannot fail
    pub fn new(config: ScenarioConfig) -> Result<Self> {
        check_parameters(&config.parameters)?;
        let scenario = Self { config };
        scenario.build_bodies()?;
        Ok(scenario)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let config = ScenarioConfig::from_path(path)?;
        tracing::info!(path = %path.display(), bodies = config.bodies.len(), "loaded scenario");
        Self::new(config)
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    pub fn parameters(&self) -> Parameters {
        let p: ParametersConfig = self.config.parameters;
        Parameters {
            g: p.g,
            min_distance: p.min_distance,
            time_scale: p.time_scale,
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        self.config.engine
    }

    /// Gravity configured from this scenario's parameters
    pub fn forces(&self) -> AccelSet {
        AccelSet::gravity(&self.parameters())
    }

    /// Map every `BodyConfig` to a validated runtime `Body`, in catalog order
    pub fn build_bodies(&self) -> Result<Vec<Body>> {
        let mut anchor: Option<&str> = None;
        let mut bodies = Vec::with_capacity(self.config.bodies.len());

        for bc in &self.config.bodies {
            if bc.anchor {
                if let Some(first) = anchor {
                    return Err(SimError::MultipleAnchors {
                        first: first.to_string(),
                        second: bc.name.clone(),
                    });
                }
                anchor = Some(bc.name.as_str());
            }
            bodies.push(build_body(bc)?);
        }

        Ok(bodies)
    }

    /// Sun and the eight planets, each on the +x axis at its mean orbital
    /// distance moving along +y at its mean orbital speed.
    pub fn solar_system() -> Self {
        let bodies = vec![
            body("Sun", true, 1.989e30, 6.9634e8, 0.0, 0.0, 25.38 * DAY, "sun.jpg"),
            body("Mercury", false, 3.3011e23, 2.4397e6, 5.791e10, 4.736e4, 58.646 * DAY, "mercury.jpg"),
            body("Venus", false, 4.8675e24, 6.0518e6, 1.0821e11, 3.502e4, -243.025 * DAY, "venus.jpg"),
            body("Earth", false, 5.97237e24, 6.371e6, 1.496e11, 2.978e4, 86_164.1, "earth.jpg"),
            body("Mars", false, 6.4171e23, 3.3895e6, 2.2794e11, 2.4077e4, 88_642.7, "mars.jpg"),
            body("Jupiter", false, 1.8982e27, 6.9911e7, 7.7857e11, 1.307e4, 35_730.0, "jupiter.jpg"),
            body("Saturn", false, 5.6834e26, 5.8232e7, 1.4335e12, 9.68e3, 38_362.4, "saturn.jpg"),
            body("Uranus", false, 8.681e25, 2.5362e7, 2.8725e12, 6.80e3, -62_064.0, "uranus.jpg"),
            body("Neptune", false, 1.02413e26, 2.4622e7, 4.4951e12, 5.43e3, 57_996.0, "neptune.jpg"),
        ];

        Self {
            config: ScenarioConfig {
                parameters: ParametersConfig::default(),
                engine: EngineConfig::default(),
                bodies,
            },
        }
    }
}

/// `min_distance` must be positive so coincident bodies never reach the
/// division; `G` and `time_scale` only need to be finite.
fn check_parameters(p: &ParametersConfig) -> Result<()> {
    if !(p.min_distance.is_finite() && p.min_distance > 0.0) {
        return Err(SimError::InvalidParameters { field: "min_distance", value: p.min_distance });
    }
    if !p.g.is_finite() {
        return Err(SimError::InvalidParameters { field: "G", value: p.g });
    }
    if !p.time_scale.is_finite() {
        return Err(SimError::InvalidParameters { field: "time_scale", value: p.time_scale });
    }
    Ok(())
}

fn build_body(bc: &BodyConfig) -> Result<Body> {
    let mut body = Body::new(
        bc.name.clone(),
        bc.mass,
        bc.radius,
        NVec3::from(bc.position),
        NVec3::from(bc.velocity),
        bc.rotation_period,
    )?;
    if bc.anchor {
        body = body.anchored();
    }
    if let Some(texture) = &bc.texture {
        body = body.with_texture(texture.clone());
    }
    Ok(body)
}

#[allow(clippy::too_many_arguments)]
fn body(
    name: &str,
    anchor: bool,
    mass: f64,
    radius: f64,
    distance: f64,
    speed: f64,
    rotation_period: f64,
    texture: &str,
) -> BodyConfig {
    BodyConfig {
        name: name.to_string(),
        anchor,
        mass,
        radius,
        position: [distance, 0.0, 0.0],
        velocity: [0.0, speed, 0.0],
        rotation_period,
        texture: Some(texture.to_string()),
    }
}
