pub mod error;
pub mod simulation;
pub mod configuration;
pub mod reporting;
pub mod benchmark;
#[cfg(feature = "viewer")]
pub mod visualization;

pub use error::SimError;

pub use simulation::states::{Body, BodyRegistry, NVec3, TextureId};
pub use simulation::params::Parameters;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::{semi_implicit_euler_step, wrap_degrees};
pub use simulation::scenario::Scenario;
pub use simulation::engine::Engine;

pub use configuration::config::{BodyConfig, EngineConfig, ParametersConfig, ScenarioConfig};

pub use reporting::report::{summarize, format_table, BodyReport};

#[cfg(feature = "viewer")]
pub use visualization::solar_vis3d::run_3d;

pub use benchmark::benchmark::{bench_step, bench_frame};
