//! Core state types for the simulation.
//!
//! - `Body`: one celestial object (constants + kinematic/rotational state)
//! - `BodyRegistry`: the ordered collection of bodies and the cumulative
//!   simulated time `t`
//!
//! Only the integrator mutates a registry; renderers and reporting read it.

use nalgebra::Vector3;

use crate::error::{Result, SimError};
use crate::simulation::scenario::Scenario;

pub type NVec3 = Vector3<f64>;

/// Opaque texture identifier stored for the rendering side. Never read here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureId(pub String);

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    name: String,
    anchor: bool, // stationary reference body, still exerts force
    mass: f64, // kg
    radius: f64, // m
    rotation_period: f64, // s, negative = retrograde, 0 = no spin
    pub position: NVec3, // m
    pub velocity: NVec3, // m/s
    rotation: f64, // degrees in [0, 360)
    pub texture: Option<TextureId>,
}

impl Body {
    /// Build a body, rejecting physically invalid constants.
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        radius: f64,
        position: NVec3,
        velocity: NVec3,
        rotation_period: f64,
    ) -> Result<Self> {
        let name = name.into();
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::InvalidMass { name, mass });
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::InvalidRadius { name, radius });
        }
        // a subnormal period would turn every rotation delta into inf
        if !rotation_period.is_finite()
            || (rotation_period != 0.0 && !(360.0 / rotation_period).is_finite())
        {
            return Err(SimError::InvalidRotationPeriod { name, period: rotation_period });
        }
        if position.iter().any(|c| !c.is_finite()) {
            return Err(SimError::NonFiniteState { name, field: "position" });
        }
        if velocity.iter().any(|c| !c.is_finite()) {
            return Err(SimError::NonFiniteState { name, field: "velocity" });
        }

        Ok(Self {
            name,
            anchor: false,
            mass,
            radius,
            rotation_period,
            position,
            velocity,
            rotation: 0.0,
            texture: None,
        })
    }

    /// Mark this body as the stationary anchor.
    pub fn anchored(mut self) -> Self {
        self.anchor = true;
        self
    }

    pub fn with_texture(mut self, texture: impl Into<String>) -> Self {
        self.texture = Some(TextureId(texture.into()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_anchor(&self) -> bool {
        self.anchor
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn rotation_period(&self) -> f64 {
        self.rotation_period
    }

    /// Spin angle in degrees, always in [0, 360)
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub(crate) fn set_rotation(&mut self, deg: f64) {
        self.rotation = deg;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyRegistry {
    bodies: Vec<Body>, // insertion order matters for summation order
    t: f64, // simulated seconds since last reset
}

impl BodyRegistry {
    /// Empty registry, no bodies, t = 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry freshly reset from `scenario`
    pub fn from_scenario(scenario: &Scenario) -> Result<Self> {
        let mut registry = Self::new();
        registry.reset(scenario)?;
        Ok(registry)
    }

    /// Replace every body with the scenario catalog and zero the clock.
    ///
    /// The new collection is built and checked completely before the swap, so
    /// on error the previous bodies and time are left untouched.
    pub fn reset(&mut self, scenario: &Scenario) -> Result<()> {
        let bodies = scenario.build_bodies()?;
        tracing::info!(bodies = bodies.len(), "registry reset");
        self.bodies = bodies;
        self.t = 0.0;
        Ok(())
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Look a body up by its exact name
    pub fn get(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// Index of the reference body for distance reporting: the flagged anchor,
    /// or the first body when nothing is flagged.
    pub fn anchor_index(&self) -> Option<usize> {
        if self.bodies.is_empty() {
            return None;
        }
        Some(self.bodies.iter().position(|b| b.anchor).unwrap_or(0))
    }

    pub fn anchor(&self) -> Option<&Body> {
        self.anchor_index().map(|i| &self.bodies[i])
    }

    /// Cumulative simulated seconds applied by the integrator
    pub fn simulated_time(&self) -> f64 {
        self.t
    }

    pub(crate) fn advance_time(&mut self, dt: f64) {
        self.t += dt;
    }
}
