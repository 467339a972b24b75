//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the constants the integrator and gravity term use:
//! - gravitational constant `g`
//! - minimum pair distance below which no force is computed
//! - fixed time-scale multiplier applied to every elapsed value

/// Gravitational constant, m^3 kg^-1 s^-2
pub const G: f64 = 6.67430e-11;

/// Pairs closer than this (m) contribute no force for the step
pub const MIN_DISTANCE: f64 = 1.0e7;

/// Simulated seconds per unit of elapsed time handed to the integrator
pub const TIME_SCALE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub min_distance: f64, // stability guard, m
    pub time_scale: f64, // elapsed -> simulated seconds
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: G,
            min_distance: MIN_DISTANCE,
            time_scale: TIME_SCALE,
        }
    }
}

impl Parameters {
    /// Simulated seconds one integrator call with `elapsed` represents
    pub fn simulated_seconds(&self, elapsed: f64) -> f64 {
        elapsed * self.time_scale
    }
}
