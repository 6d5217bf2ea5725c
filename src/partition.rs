//! Greedy MDL partitioning scan.
//!
//! This module implements the main [`partition`] entry point: a single
//! left-to-right pass that grows a candidate window, compares the MDL cost
//! of merging it against keeping its raw segments, and commits a
//! characteristic point whenever compression stops paying off.
//!
//! # Pipeline Overview
//!
//! 1. Validate trajectory and configuration (all errors surface here)
//! 2. Grow the window one raw segment at a time
//! 3. Evaluate both hypotheses over the current window
//! 4. Cut at `curr − 1` when the merged hypothesis costs more, restart
//!    the window there
//! 5. Always retain the final trajectory point

use crate::config::{PartitionConfig, TieBreak};
use crate::cost::{encoding_cost, total_cost, Hypothesis};
use crate::error::{PartitionError, Result};
use crate::geometry::euclidean_distance;
use crate::trajectory::{Partition, Point, Window};

/// Minimum number of points required for partitioning.
pub const MIN_POINTS: usize = 2;

/// Tolerance for comparing the two hypothesis costs.
///
/// Floating-point summation order is not bit-exact, so cost differences
/// inside this band count as ties and the configured tie-break applies.
const COST_EPS: f64 = 1e-9;

/// Progress snapshot delivered once per outer scan iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanProgress {
    /// Start index of the current window (last committed point).
    pub window_start: usize,
    /// Trajectory index currently under evaluation.
    pub current_index: usize,
    /// Total trajectory length.
    pub trajectory_len: usize,
    /// Cuts committed so far (not counting the initial point).
    pub cuts: usize,
}

/// Partition a trajectory into characteristic points.
///
/// This is the main entry point. It performs a single greedy forward scan
/// in O(n²) worst-case work and returns the retained indices; the first
/// and last trajectory points are always kept.
///
/// # Errors
///
/// Returns an error if:
/// - The trajectory has fewer than [`MIN_POINTS`] points
/// - Any coordinate is NaN or infinite
/// - A cost-model weight is non-positive or non-finite
///
/// # Example
///
/// ```
/// use traj_partition::{partition, PartitionConfig, Point};
///
/// let trajectory = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(2.0, 1.0),
///     Point::new(2.0, 2.0),
/// ];
///
/// let result = partition(&trajectory, &PartitionConfig::default())?;
/// assert_eq!(result.indices(), &[0, 2, 4]); // the corner is retained
/// # Ok::<(), traj_partition::PartitionError>(())
/// ```
pub fn partition(trajectory: &[Point], config: &PartitionConfig) -> Result<Partition> {
    partition_with_progress(trajectory, config, |_| {})
}

/// Partition a trajectory, reporting progress once per scan iteration.
///
/// The callback is an external collaborator only: it observes the scan and
/// has no influence on the result.
///
/// # Errors
///
/// Same conditions as [`partition`].
pub fn partition_with_progress(
    trajectory: &[Point],
    config: &PartitionConfig,
    mut on_step: impl FnMut(ScanProgress),
) -> Result<Partition> {
    validate_trajectory(trajectory)?;
    config.validate()?;

    let n = trajectory.len();
    let mut indices = vec![0];
    let mut start_idx = 0usize;
    let mut length = 1usize;

    // Window-scoped accumulator of the raw path length, advanced by
    // integer offset as the window extends and reset on every cut. This
    // is the only state cached across iterations besides the scan
    // position itself.
    let mut window_raw_length = raw_segment_length(trajectory, start_idx);

    while start_idx + length < n {
        let curr_idx = start_idx + length;
        let window = Window::new(start_idx, curr_idx);

        on_step(ScanProgress {
            window_start: start_idx,
            current_index: curr_idx,
            trajectory_len: n,
            cuts: indices.len() - 1,
        });

        let cost_merged = total_cost(trajectory, window, Hypothesis::Merged, config);
        let cost_raw = encoding_cost(window_raw_length);

        let diff = cost_merged - cost_raw;
        let wants_cut = match config.tie_break {
            TieBreak::PreferCompression => diff > COST_EPS,
            TieBreak::PreferFidelity => diff > -COST_EPS,
        };

        // A one-segment window has nothing to cut: the cut index would
        // equal start_idx and violate strict monotonicity of the output.
        if wants_cut && window.num_segments() >= 2 {
            indices.push(curr_idx - 1);
            start_idx = curr_idx - 1;
            length = 1;
            window_raw_length = raw_segment_length(trajectory, start_idx);
        } else {
            length += 1;
            if start_idx + length < n {
                window_raw_length += raw_segment_length(trajectory, curr_idx);
            }
        }
    }

    // The trajectory's final point is always a characteristic point.
    indices.push(n - 1);

    Ok(Partition::from_indices(indices, n))
}

/// Validate a trajectory at entry.
///
/// # Errors
///
/// Returns [`PartitionError::TrajectoryTooShort`] for fewer than
/// [`MIN_POINTS`] points and [`PartitionError::NonFiniteCoordinate`] for
/// the first NaN or infinite coordinate.
pub fn validate_trajectory(trajectory: &[Point]) -> Result<()> {
    if trajectory.len() < MIN_POINTS {
        return Err(PartitionError::trajectory_too_short(
            MIN_POINTS,
            trajectory.len(),
        ));
    }

    for (index, point) in trajectory.iter().enumerate() {
        if !point.is_finite() {
            return Err(PartitionError::non_finite_coordinate(index));
        }
    }

    Ok(())
}

/// Length of the raw segment `trajectory[j] → trajectory[j + 1]`.
#[inline]
fn raw_segment_length(trajectory: &[Point], j: usize) -> f64 {
    euclidean_distance(&trajectory[j], &trajectory[j + 1])
}
