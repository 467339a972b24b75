//! Force / acceleration contributors for the simulation
//!
//! Defines the acceleration trait, the set that sums terms, and direct
//! Newtonian gravity with a minimum-distance cutoff.

use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3};

/// Collection of acceleration terms.
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Newtonian gravity only, configured from `params`
    pub fn gravity(params: &Parameters) -> Self {
        Self::new().with(NewtonianGravity::from_params(params))
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies
    /// - `out[i]` will be set to the sum of contributions from all terms
    /// - anchor bodies are left at zero
    pub fn accumulate_accels(&self, bodies: &[Body], out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        for term in &self.terms {
            term.acceleration(bodies, out);
        }
    }
}

/// Acceleration sources. Implementations add their contribution into `out[i]`
/// for each non-anchor body `i`
pub trait Acceleration {
    fn acceleration(&self, bodies: &[Body], out: &mut [NVec3]);
}

/// Newtonian gravity, direct n^2 sum.
/// Pairs closer than `min_distance` are skipped entirely instead of softened.
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub g: f64,
    pub min_distance: f64,
}

impl NewtonianGravity {
    pub fn from_params(params: &Parameters) -> Self {
        Self {
            g: params.g,
            min_distance: params.min_distance,
        }
    }

    /// Acceleration on `b` due to `o`, or `None` when the pair is inside the
    /// minimum distance (which includes a body paired with itself).
    pub fn pair_acceleration(&self, b: &Body, o: &Body) -> Option<NVec3> {
        // displacement from b toward o
        let d = o.position - b.position;
        let r = d.norm();
        if r < self.min_distance {
            return None;
        }

        // F = G mb mo / r^2, applied to b as F / mb along d / r
        let force = self.g * b.mass() * o.mass() / (r * r);
        let accel = force / b.mass();

        Some(NVec3::new(accel * d.x / r, accel * d.y / r, accel * d.z / r))
    }
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, bodies: &[Body], out: &mut [NVec3]) {
        for (i, b) in bodies.iter().enumerate() {
            // the anchor never moves, so its acceleration is never needed
            if b.is_anchor() {
                continue;
            }
            for (j, o) in bodies.iter().enumerate() {
                if i == j {
                    continue;
                }
                if let Some(a) = self.pair_acceleration(b, o) {
                    out[i] += a;
                }
            }
        }
    }
}
