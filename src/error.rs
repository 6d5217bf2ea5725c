//! Error types for trajectory partitioning.
//!
//! All validation happens once at the partitioning entry point; the scan
//! itself is total over validated input and never produces an error.

use thiserror::Error;

/// Main error type for trajectory partitioning operations.
#[derive(Error, Debug)]
pub enum PartitionError {
    /// Trajectory is too short to partition.
    #[error("Trajectory too short: need at least {min} points, got {actual}")]
    TrajectoryTooShort { min: usize, actual: usize },

    /// A coordinate is NaN or infinite.
    #[error("Non-finite coordinate at index {index}")]
    NonFiniteCoordinate { index: usize },

    /// A cost-model weight is non-positive or non-finite.
    #[error("Invalid weight {name}: {value} (must be positive and finite)")]
    InvalidWeight { name: &'static str, value: f64 },
}

/// Result type alias for trajectory partitioning operations.
pub type Result<T> = std::result::Result<T, PartitionError>;

impl PartitionError {
    /// Create a trajectory too short error.
    #[must_use]
    pub const fn trajectory_too_short(min: usize, actual: usize) -> Self {
        Self::TrajectoryTooShort { min, actual }
    }

    /// Create a non-finite coordinate error.
    #[must_use]
    pub const fn non_finite_coordinate(index: usize) -> Self {
        Self::NonFiniteCoordinate { index }
    }

    /// Create an invalid weight error.
    #[must_use]
    pub const fn invalid_weight(name: &'static str, value: f64) -> Self {
        Self::InvalidWeight { name, value }
    }
}
