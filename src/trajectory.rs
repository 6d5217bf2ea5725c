//! Trajectory data model.
//!
//! This module defines the value types the partitioner operates on:
//! [`Point`], the directed [`Segment`], the scan [`Window`], and the
//! [`Partition`] output (the characteristic point set).
//!
//! The trajectory itself is a caller-owned `&[Point]` slice; no component
//! of the crate copies or mutates it. Windows and segments borrow into it
//! through index ranges only.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D position sample. Immutable value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite (not NaN, not infinite).
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// A directed line segment between two points.
///
/// Direction (head → tail) matters for the angular-distance semantics;
/// the distance magnitudes themselves are symmetric.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    /// Start point.
    pub head: Point,
    /// End point.
    pub tail: Point,
}

impl Segment {
    /// Create a segment from two points.
    #[must_use]
    pub const fn new(head: Point, tail: Point) -> Self {
        Self { head, tail }
    }

    /// Segment spanning `trajectory[i]` → `trajectory[j]`.
    ///
    /// With `j = i + 1` this is a raw segment; with a wider span it is a
    /// candidate merged segment.
    #[must_use]
    pub fn between(trajectory: &[Point], i: usize, j: usize) -> Self {
        Self {
            head: trajectory[i],
            tail: trajectory[j],
        }
    }

    /// X extent (tail.x − head.x).
    #[inline]
    #[must_use]
    pub fn dx(&self) -> f64 {
        self.tail.x - self.head.x
    }

    /// Y extent (tail.y − head.y).
    #[inline]
    #[must_use]
    pub fn dy(&self) -> f64 {
        self.tail.y - self.head.y
    }

    /// Euclidean length.
    #[inline]
    #[must_use]
    pub fn length(&self) -> f64 {
        self.dx().hypot(self.dy())
    }

    /// Whether head and tail coincide (zero-length segment).
    ///
    /// Duplicate consecutive trajectory points produce degenerate raw
    /// segments; they are valid input and all distance metrics treat
    /// them as contributing zero.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.head == self.tail
    }
}

/// Half-open index range `[start, end)` identifying the current candidate
/// merged segment and the raw segments it would replace.
///
/// `start` is always a previously committed (or initial) characteristic
/// point index; `end` never exceeds `n − 1`. Windows are ephemeral: one is
/// created and discarded per scan step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// First trajectory index covered by the window.
    pub start: usize,
    /// Trajectory index of the candidate merged segment's tail.
    pub end: usize,
}

impl Window {
    /// Create a window. `start < end` is required.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "window must span at least one raw segment");
        Self { start, end }
    }

    /// Indices `j` of the raw segments `trajectory[j] → trajectory[j + 1]`
    /// inside the window.
    #[must_use]
    pub fn raw_segments(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// Number of raw segments the merged segment would replace.
    #[must_use]
    pub fn num_segments(&self) -> usize {
        self.end - self.start
    }
}

/// The partitioning output: a strictly increasing sequence of trajectory
/// indices, beginning at 0 and ending at `n − 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Partition {
    indices: Vec<usize>,
    source_len: usize,
}

impl Partition {
    /// Build a partition from its characteristic point indices.
    pub(crate) fn from_indices(indices: Vec<usize>, source_len: usize) -> Self {
        debug_assert!(indices.first() == Some(&0));
        debug_assert!(indices.last() == Some(&(source_len - 1)));
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        Self {
            indices,
            source_len,
        }
    }

    /// Characteristic point indices into the source trajectory.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of characteristic points retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// A partition always retains at least the two endpoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Length of the source trajectory this partition was computed from.
    #[must_use]
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    /// Fraction of input points retained, in `(0, 1]`.
    #[must_use]
    pub fn compression_ratio(&self) -> f64 {
        self.indices.len() as f64 / self.source_len as f64
    }

    /// Materialize the simplified polyline from the source trajectory.
    ///
    /// # Panics
    ///
    /// Panics if `trajectory` is shorter than the trajectory this
    /// partition was computed from.
    #[must_use]
    pub fn points(&self, trajectory: &[Point]) -> Vec<Point> {
        self.indices.iter().map(|&i| trajectory[i]).collect()
    }
}
