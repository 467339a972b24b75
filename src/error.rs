//! Error types for body construction and scenario loading
//!
//! The per-step integrator never fails; everything here is raised while a
//! catalog is being built, before any body reaches the registry.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("body '{name}': mass must be positive and finite, got {mass}")]
    InvalidMass { name: String, mass: f64 },

    #[error("body '{name}': radius must be positive and finite, got {radius}")]
    InvalidRadius { name: String, radius: f64 },

    #[error("body '{name}': rotation period must be finite and not subnormal, got {period}")]
    InvalidRotationPeriod { name: String, period: f64 },

    #[error("body '{name}': {field} has a non-finite component")]
    NonFiniteState { name: String, field: &'static str },

    #[error("parameter '{field}' is out of range, got {value}")]
    InvalidParameters { field: &'static str, value: f64 },

    #[error("scenario has more than one anchor body ('{first}' and '{second}')")]
    MultipleAnchors { first: String, second: String },

    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
