//! MDL cost model.
//!
//! Computes the description cost of a scan window under two hypotheses:
//! representing its raw segments as one compressed segment
//! ([`Hypothesis::Merged`]) or keeping them as-is ([`Hypothesis::Raw`]).
//! Both costs are pure functions of (trajectory, window, config) with no
//! shared state, so they can be evaluated independently.
//!
//! The raw hypothesis is priced as the encoding cost of the window's total
//! path length. A perfectly straight window therefore costs exactly the
//! same under both hypotheses (chord length equals path length and the
//! fidelity term vanishes), and the tie-break decides.

use crate::config::PartitionConfig;
use crate::geometry::{angular_distance, perpendicular_distance};
use crate::trajectory::{Point, Segment, Window};

/// The two ways a window can be encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hypothesis {
    /// One compressed segment spanning the whole window, paying a
    /// fidelity penalty for the deviation of each raw segment.
    Merged,
    /// The raw segments themselves; no compression, no fidelity penalty.
    Raw,
}

/// Bits needed to encode a segment of the given length under an idealized
/// model: `log2(length)`, clamped to 0 for lengths ≤ 1.
///
/// The clamp keeps degenerate (zero-length) and sub-unit segments free
/// instead of producing negative or undefined bit costs.
///
/// # Example
///
/// ```
/// use traj_partition::cost::encoding_cost;
///
/// assert_eq!(encoding_cost(8.0), 3.0);
/// assert_eq!(encoding_cost(1.0), 0.0);
/// assert_eq!(encoding_cost(0.0), 0.0);
/// ```
#[inline]
#[must_use]
pub fn encoding_cost(length: f64) -> f64 {
    if length <= 1.0 {
        0.0
    } else {
        length.log2()
    }
}

/// Fidelity cost of the merged hypothesis ("L(D|H)"): the weighted sum,
/// over every raw segment in the window, of its perpendicular and angular
/// deviation from the candidate merged segment.
#[must_use]
pub fn hypothesis_cost(trajectory: &[Point], window: Window, config: &PartitionConfig) -> f64 {
    let merged = Segment::between(trajectory, window.start, window.end);

    window
        .raw_segments()
        .map(|j| {
            let raw = Segment::between(trajectory, j, j + 1);
            config.w_perpendicular * perpendicular_distance(&merged, &raw)
                + config.w_angular * angular_distance(&merged, &raw, config.directional)
        })
        .sum()
}

/// Total MDL cost of the window under the given hypothesis.
///
/// - `Merged`: encoding cost of the spanning segment plus the fidelity
///   cost of the raw segments it replaces.
/// - `Raw`: encoding cost of the window's total raw path length, with no
///   fidelity term.
#[must_use]
pub fn total_cost(
    trajectory: &[Point],
    window: Window,
    hypothesis: Hypothesis,
    config: &PartitionConfig,
) -> f64 {
    match hypothesis {
        Hypothesis::Merged => {
            let merged = Segment::between(trajectory, window.start, window.end);
            encoding_cost(merged.length()) + hypothesis_cost(trajectory, window, config)
        }
        Hypothesis::Raw => {
            let path_length: f64 = window
                .raw_segments()
                .map(|j| Segment::between(trajectory, j, j + 1).length())
                .sum();
            encoding_cost(path_length)
        }
    }
}
