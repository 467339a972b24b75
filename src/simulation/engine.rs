//! Runtime engine: the scenario, the live registry and the driver settings
//!
//! All time scaling lives here. One rendered frame of real duration `d`
//! becomes `substeps` integrator calls, each handed
//! `elapsed = d_ms * speed_multiplier`. The integrator turns that into
//! `elapsed * time_scale` simulated seconds and adds exactly that to the
//! registry clock, so
//!
//! ```text
//! simulated seconds per frame = d_ms * speed_multiplier * time_scale * substeps
//! ```
//!
//! and the displayed clock always matches what was integrated.

use std::time::Duration;

use crate::error::Result;
use crate::simulation::forces::AccelSet;
use crate::simulation::integrator::semi_implicit_euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::BodyRegistry;

/// Lowest and highest speed multiplier reachable through `faster`/`slower`
const MIN_SPEED: f64 = 1.0 / 1024.0;
const MAX_SPEED: f64 = 1024.0;

pub struct Engine {
    scenario: Scenario,
    registry: BodyRegistry,
    forces: AccelSet,
    parameters: Parameters,
    pub substeps: u32, // integrator calls per frame
    speed_multiplier: f64,
    pub paused: bool,
}

impl Engine {
    pub fn new(scenario: Scenario) -> Result<Self> {
        let registry = BodyRegistry::from_scenario(&scenario)?;
        let parameters = scenario.parameters();
        let forces = scenario.forces();
        let engine_cfg = scenario.engine_config();

        Ok(Self {
            scenario,
            registry,
            forces,
            parameters,
            substeps: engine_cfg.substeps,
            speed_multiplier: engine_cfg.speed_multiplier,
            paused: false,
        })
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    pub fn set_speed_multiplier(&mut self, speed: f64) {
        self.speed_multiplier = speed;
    }

    /// Double the speed multiplier, capped
    pub fn faster(&mut self) {
        self.speed_multiplier = (self.speed_multiplier * 2.0).min(MAX_SPEED);
    }

    /// Halve the speed multiplier, floored
    pub fn slower(&mut self) {
        self.speed_multiplier = (self.speed_multiplier * 0.5).max(MIN_SPEED);
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Back to the scenario's starting catalog with the clock at zero.
    /// Speed and pause state are driver settings and survive a reset.
    pub fn reset(&mut self) -> Result<()> {
        self.registry.reset(&self.scenario)
    }

    /// Elapsed value handed to each integrator call for a frame of `frame_delta`
    pub fn substep_elapsed(&self, frame_delta: Duration) -> f64 {
        frame_delta.as_secs_f64() * 1000.0 * self.speed_multiplier
    }

    /// Simulated seconds one frame of `frame_delta` advances the registry
    pub fn simulated_seconds_per_frame(&self, frame_delta: Duration) -> f64 {
        self.parameters.simulated_seconds(self.substep_elapsed(frame_delta)) * self.substeps as f64
    }

    /// Run every sub-step for one rendered frame. Returns the simulated
    /// seconds applied (0 while paused).
    pub fn advance_frame(&mut self, frame_delta: Duration) -> f64 {
        if self.paused {
            return 0.0;
        }

        let elapsed = self.substep_elapsed(frame_delta);
        let before = self.registry.simulated_time();
        for _ in 0..self.substeps {
            semi_implicit_euler_step(&mut self.registry, &self.forces, &self.parameters, elapsed);
        }
        let applied = self.registry.simulated_time() - before;

        tracing::debug!(
            substeps = self.substeps,
            elapsed,
            applied,
            t = self.registry.simulated_time(),
            "frame advanced"
        );
        applied
    }
}
