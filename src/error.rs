//! Error types for configuration and instance loading.

use std::path::PathBuf;

use thiserror::Error;

/// Invalid problem or annealing configuration.
///
/// Reported before any optimization work begins.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The point list is empty.
    #[error("point list must contain at least one city")]
    EmptyInstance,
    /// A point has a `NaN` or infinite coordinate.
    #[error("city {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the offending point in the input list.
        index: usize,
    },
    /// The iteration budget is zero.
    #[error("iterations must be greater than zero")]
    ZeroIterations,
    /// The initial temperature is not a positive finite number.
    #[error("initial_temperature must be positive and finite, got {0}")]
    InvalidTemperature(f64),
    /// The cooling rate is outside the open interval (0, 1).
    #[error("cooling_rate must be in (0, 1), got {0}")]
    InvalidCoolingRate(f64),
}

/// Failure while reading a TSPLIB coordinate file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no NODE_COORD_SECTION found")]
    MissingCoordSection,
    /// A coordinate line has a field that is not a number.
    #[error("line {line}: invalid {field}")]
    InvalidCoordinate {
        /// 1-based line number in the input.
        line: usize,
        field: &'static str,
    },
}
