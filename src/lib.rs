//! Trajectory Partitioning Library
//!
//! MDL-based trajectory simplification (the TRACLUS-style partitioning
//! step) for 2D trajectories.
//!
//! Given an ordered sequence of positions, the partitioner selects the
//! subsequence of "characteristic points" that preserves the trajectory's
//! geometric shape, trading compression against fidelity with a
//! Minimum-Description-Length cost model. The output is a strictly
//! increasing index set that always retains the first and last point,
//! ready for a downstream clustering or compression stage.
//!
//! # Features
//!
//! - **MDL cost model**: explicit merged/raw hypothesis enumeration
//! - **TRACLUS distances**: perpendicular and angular deviation metrics
//! - **Deterministic**: single forward scan, no backtracking, O(n²) worst case
//! - **Total over valid input**: degenerate zero-length segments are
//!   well-defined, all validation happens at entry
//!
//! # Quick Start
//!
//! ```
//! use traj_partition::{partition, PartitionConfig, Point};
//!
//! let trajectory = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(2.0, 0.0),
//!     Point::new(2.0, 1.0),
//!     Point::new(2.0, 2.0),
//! ];
//!
//! let result = partition(&trajectory, &PartitionConfig::default())?;
//! assert_eq!(result.indices(), &[0, 2, 4]);
//!
//! // Materialize the simplified polyline
//! let simplified = result.points(&trajectory);
//! assert_eq!(simplified.len(), 3);
//! # Ok::<(), traj_partition::PartitionError>(())
//! ```
//!
//! # Presets
//!
//! Domain-specific configurations are available:
//!
//! ```
//! use traj_partition::PartitionConfig;
//!
//! let gps_config = PartitionConfig::gps();
//! let fine_config = PartitionConfig::high_fidelity();
//! let coarse_config = PartitionConfig::coarse();
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_precision_loss)]

pub mod config;
pub mod cost;
pub mod error;
pub mod geometry;
pub mod partition;
pub mod trajectory;

// Re-exports for convenient access
pub use config::{PartitionConfig, TieBreak};
pub use cost::{encoding_cost, hypothesis_cost, total_cost, Hypothesis};
pub use error::{PartitionError, Result};
pub use geometry::{
    angular_distance, euclidean_distance, perpendicular_distance, project_onto_line,
};
pub use partition::{
    partition, partition_with_progress, validate_trajectory, ScanProgress, MIN_POINTS,
};
pub use trajectory::{Partition, Point, Segment, Window};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
