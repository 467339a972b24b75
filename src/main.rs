use solsim::{Engine, Scenario};
use solsim::{bench_frame, bench_step, format_table};

use clap::Parser;
use anyhow::{Context, Result};

use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(about = "Newtonian solar-system simulation")]
struct Args {
    /// Scenario YAML; relative names are looked up in scenarios/.
    /// Built-in solar system when omitted
    #[arg(short, long)]
    file_name: Option<String>,

    /// Run without a window and print a report at the end
    #[arg(long)]
    headless: bool,

    /// Frames to simulate in headless mode
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Real duration of one headless frame, ms
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Speed multiplier override
    #[arg(long)]
    speed: Option<f64>,

    /// Integrator calls per frame override
    #[arg(long)]
    substeps: Option<u32>,

    /// Time the integrator instead of simulating
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(file_name: Option<&str>) -> Result<Scenario> {
    let Some(file_name) = file_name else {
        return Ok(Scenario::solar_system());
    };

    let mut path = PathBuf::from(file_name);
    if path.is_relative() && !path.exists() {
        path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    }

    Scenario::from_path(&path).with_context(|| format!("failed to load scenario {}", path.display()))
}

fn run_headless(engine: &mut Engine, frames: u32, frame_ms: u64) {
    let frame = Duration::from_millis(frame_ms);
    tracing::info!(
        frames,
        sim_seconds_per_frame = engine.simulated_seconds_per_frame(frame),
        "running headless"
    );

    for _ in 0..frames {
        engine.advance_frame(frame);
    }

    print!("{}", format_table(engine.registry()));
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let args = Args::parse();

    let scenario = load_scenario(args.file_name.as_deref())?;
    let mut engine = Engine::new(scenario)?;
    if let Some(speed) = args.speed {
        engine.set_speed_multiplier(speed);
    }
    if let Some(substeps) = args.substeps {
        engine.substeps = substeps;
    }

    if args.bench {
        bench_step()?;
        bench_frame(&mut engine);
        return Ok(());
    }

    if args.headless {
        run_headless(&mut engine, args.frames, args.frame_ms);
        return Ok(());
    }

    #[cfg(feature = "viewer")]
    solsim::run_3d(engine);

    #[cfg(not(feature = "viewer"))]
    {
        tracing::warn!("built without the `viewer` feature, running headless");
        run_headless(&mut engine, args.frames, args.frame_ms);
    }

    Ok(())
}
