//! Error types for the PSO-TSP solver.

use thiserror::Error;

/// Errors raised while loading a problem or setting up a run.
#[derive(Debug, Error)]
pub enum PsoError {
    #[error("at least 2 cities are required, got {count}")]
    TooFewCities { count: usize },
    #[error("at least 2 particles are required, got {count}")]
    TooFewParticles { count: usize },
    #[error("v_max {v_max} must be below the city count {city_count}")]
    InvalidVelocityLimit { v_max: usize, city_count: usize },
    #[error("swap probability {0} must be between 0.0 and 1.0")]
    InvalidSwapProbability(f64),
    #[error("the population has not been initialized")]
    NotInitialized,
    #[error("all cities coincide, every tour has length 0")]
    DegenerateGeometry,
    #[error("missing DIMENSION header")]
    MissingDimension,
    #[error("DIMENSION says {expected} cities but {found} were read")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid configuration file: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PsoError>;
