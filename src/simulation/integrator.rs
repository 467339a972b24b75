//! Fixed-step time integrator for the body registry
//!
//! Semi-implicit (symplectic) Euler: velocities are kicked with the current
//! accelerations over the whole registry first, then positions drift with the
//! already-updated velocities. The two passes must not be fused per body.

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{BodyRegistry, NVec3};

/// Advance the registry by one step of `elapsed` (scaled by `params.time_scale`).
///
/// Anchor bodies keep their position and velocity bit-for-bit. Rotation
/// advances for every body with a nonzero period. The registry clock advances
/// by the simulated seconds this step applied.
pub fn semi_implicit_euler_step(
    registry: &mut BodyRegistry,
    forces: &AccelSet,
    params: &Parameters,
    elapsed: f64,
) {
    let dt = params.simulated_seconds(elapsed); // simulated seconds this step
    registry.advance_time(dt);

    let n = registry.len();
    if n == 0 { // no bodies, only the clock moves
        return;
    }

    // a[i] for every body from the positions at the start of the step
    let mut accels = vec![NVec3::zeros(); n];
    forces.accumulate_accels(registry.bodies(), &mut accels);

    // Kick: v += a dt
    for (b, a) in registry.bodies_mut().iter_mut().zip(accels.iter()) {
        if b.is_anchor() {
            continue;
        }
        b.velocity += *a * dt;
    }

    // Drift with the new velocities: x += v dt
    for b in registry.bodies_mut().iter_mut() {
        if b.is_anchor() {
            continue;
        }
        b.position += b.velocity * dt;
    }

    // Spin
    for b in registry.bodies_mut().iter_mut() {
        let period = b.rotation_period();
        if period == 0.0 {
            continue;
        }
        let delta = dt / period * 360.0;
        // an overflowing delta has no meaningful angle, keep the last one
        if !delta.is_finite() {
            continue;
        }
        b.set_rotation(wrap_degrees(b.rotation() + delta));
    }
}

/// Reduce an angle in degrees into [0, 360).
///
/// `rem_euclid` can round a tiny negative input up to exactly 360.0, which is
/// folded back to 0.0.
pub fn wrap_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
