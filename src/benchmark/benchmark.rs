use std::time::{Duration, Instant};

use crate::simulation::engine::Engine;
use crate::simulation::forces::AccelSet;
use crate::simulation::integrator::semi_implicit_euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{BodyRegistry, NVec3};
use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::Result;

/// Helper to build a registry of `n` bodies around a heavy anchor.
/// Positions are deterministic, no rand needed
fn make_registry(n: usize) -> Result<BodyRegistry> {
    let mut bodies = Vec::with_capacity(n);
    bodies.push(BodyConfig {
        name: "anchor".to_string(),
        anchor: true,
        mass: 2.0e30,
        radius: 7.0e8,
        position: [0.0; 3],
        velocity: [0.0; 3],
        rotation_period: 2.0e6,
        texture: None,
    });

    for i in 1..n {
        let i_f = i as f64;
        let x = NVec3::new(
            (i_f * 0.37).sin(),
            (i_f * 0.13).cos(),
            (i_f * 0.07).sin() * 0.1,
        ) * 1.0e11 * (1.0 + i_f / n as f64);

        bodies.push(BodyConfig {
            name: format!("body-{i}"),
            anchor: false,
            mass: 6.0e24,
            radius: 6.0e6,
            position: [x.x, x.y, x.z],
            velocity: [0.0, 3.0e4, 0.0],
            rotation_period: 86_400.0,
            texture: None,
        });
    }

    let cfg = ScenarioConfig {
        bodies,
        ..Default::default()
    };

    BodyRegistry::from_scenario(&Scenario::new(cfg)?)
}

/// Time a single integrator step for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_step() -> Result<()> {
    let params = Parameters::default();
    let forces = AccelSet::gravity(&params);

    println!("N,step_us");

    for n in [2, 4, 8, 16, 32, 64, 128, 256, 512] {
        let mut registry = make_registry(n)?;
        // small n: average over more steps to smooth noise
        let steps = (100_000 / n).max(10);

        // Warm-up
        semi_implicit_euler_step(&mut registry, &forces, &params, 1.0);

        let t0 = Instant::now();
        for _ in 0..steps {
            semi_implicit_euler_step(&mut registry, &forces, &params, 1.0);
        }
        let us = t0.elapsed().as_secs_f64() * 1.0e6 / steps as f64;

        println!("{},{:.3}", n, us);
    }

    Ok(())
}

/// Time one full frame (all sub-steps) of the solar-system catalog
pub fn bench_frame(engine: &mut Engine) {
    let frame = Duration::from_millis(16);
    let frames = 60;

    // Warm-up
    engine.advance_frame(frame);

    let t0 = Instant::now();
    for _ in 0..frames {
        engine.advance_frame(frame);
    }
    let ms = t0.elapsed().as_secs_f64() * 1000.0 / frames as f64;

    println!(
        "{} bodies, {} substeps/frame: {:.3} ms/frame",
        engine.registry().len(),
        engine.substeps,
        ms
    );
}
