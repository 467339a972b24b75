//! Read-only summaries of the registry for HUDs and the headless driver
//!
//! All unit conversion (m -> AU, m/s -> km/s, s -> days) happens here; the
//! simulation itself stays in SI units.

use std::fmt::Write;

use crate::simulation::states::{BodyRegistry, NVec3};

/// Astronomical unit, m
pub const AU: f64 = 1.495978707e11;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Debug, Clone, PartialEq)]
pub struct BodyReport {
    pub name: String,
    pub distance_au: f64, // to the anchor body
    pub speed_km_s: f64,
    pub position_au: NVec3,
    pub rotation_deg: f64,
    pub radius_km: f64,
}

/// One row per body, in registry order. Distances are measured from the
/// anchor (or the first body when none is flagged).
pub fn summarize(registry: &BodyRegistry) -> Vec<BodyReport> {
    let origin = registry.anchor().map(|a| a.position).unwrap_or_else(NVec3::zeros);

    registry
        .bodies()
        .iter()
        .map(|b| BodyReport {
            name: b.name().to_string(),
            distance_au: (b.position - origin).norm() / AU,
            speed_km_s: b.velocity.norm() / 1000.0,
            position_au: b.position / AU,
            rotation_deg: b.rotation(),
            radius_km: b.radius() / 1000.0,
        })
        .collect()
}

pub fn simulated_days(seconds: f64) -> f64 {
    seconds / SECONDS_PER_DAY
}

/// Fixed-width text table of `summarize` plus the simulated clock
pub fn format_table(registry: &BodyRegistry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "simulated time: {:.2} days", simulated_days(registry.simulated_time()));
    let _ = writeln!(
        out,
        "{:<10} {:>12} {:>12} {:>10} {:>12}",
        "body", "dist [AU]", "speed [km/s]", "rot [deg]", "radius [km]"
    );
    for row in summarize(registry) {
        let _ = writeln!(
            out,
            "{:<10} {:>12.4} {:>12.3} {:>10.1} {:>12.0}",
            row.name, row.distance_au, row.speed_km_s, row.rotation_deg, row.radius_km
        );
    }
    out
}
