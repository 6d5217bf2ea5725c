//! Configuration for trajectory partitioning.
//!
//! This module provides the [`PartitionConfig`] struct which centralizes all
//! tunable parameters of the MDL cost model, along with domain presets.
//!
//! # Example
//!
//! ```
//! use traj_partition::PartitionConfig;
//!
//! // Use default configuration
//! let config = PartitionConfig::default();
//!
//! // Use domain preset
//! let gps_config = PartitionConfig::gps();
//! let coarse_config = PartitionConfig::coarse();
//! ```

use crate::error::{PartitionError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for trajectory partitioning.
///
/// The weights scale the two fidelity terms of the MDL cost model. Larger
/// weights make deviations from the candidate merged segment more expensive,
/// so the scan cuts sooner and retains more characteristic points. Weights
/// below 1 bias the model toward compression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartitionConfig {
    /// Weight of the perpendicular-distance term. Must be positive.
    pub w_perpendicular: f64,

    /// Weight of the angular-distance term. Must be positive.
    pub w_angular: f64,

    /// Whether angular deviation carries direction semantics downstream.
    ///
    /// Both settings produce the same numeric angular distance (the
    /// undirected policy folds the angle to its acute complement, whose
    /// sine is identical); the flag tags how a downstream clustering
    /// stage should interpret reversed-direction segments.
    pub directional: bool,

    /// Policy applied when merged and raw costs are exactly equal.
    pub tie_break: TieBreak,
}

/// Tie-break policy for equal merged and raw costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TieBreak {
    /// Keep extending the window on ties (bias toward compression).
    #[default]
    PreferCompression,
    /// Cut on ties (bias toward fidelity).
    PreferFidelity,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            w_perpendicular: 1.0,
            w_angular: 1.0,
            directional: true,
            tie_break: TieBreak::PreferCompression,
        }
    }
}

impl PartitionConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::InvalidWeight`] if either weight is
    /// non-positive or non-finite. Zero or negative weights would make the
    /// compression trade-off meaningless, so they are rejected at entry.
    pub fn validate(&self) -> Result<()> {
        if !(self.w_perpendicular.is_finite() && self.w_perpendicular > 0.0) {
            return Err(PartitionError::invalid_weight(
                "w_perpendicular",
                self.w_perpendicular,
            ));
        }
        if !(self.w_angular.is_finite() && self.w_angular > 0.0) {
            return Err(PartitionError::invalid_weight("w_angular", self.w_angular));
        }
        Ok(())
    }

    /// Preset for noisy GPS traces.
    ///
    /// Weights the perpendicular term above the angular term so that small
    /// heading jitter between fixes does not fragment the partition, while
    /// genuine lateral drift still forces a cut.
    #[must_use]
    pub fn gps() -> Self {
        Self {
            w_perpendicular: 1.0,
            w_angular: 0.5,
            ..Self::default()
        }
    }

    /// Preset retaining more characteristic points.
    ///
    /// Larger weights make any deviation expensive, so the scan cuts early
    /// and the output stays close to the input trajectory.
    #[must_use]
    pub fn high_fidelity() -> Self {
        Self {
            w_perpendicular: 5.0,
            w_angular: 5.0,
            ..Self::default()
        }
    }

    /// Preset biased toward aggressive compression.
    ///
    /// Small weights let the window absorb larger deviations before a cut
    /// pays off, producing a coarser simplified polyline.
    #[must_use]
    pub fn coarse() -> Self {
        Self {
            w_perpendicular: 0.2,
            w_angular: 0.2,
            ..Self::default()
        }
    }

    /// Set the perpendicular-distance weight.
    #[must_use]
    pub const fn with_w_perpendicular(mut self, weight: f64) -> Self {
        self.w_perpendicular = weight;
        self
    }

    /// Set the angular-distance weight.
    #[must_use]
    pub const fn with_w_angular(mut self, weight: f64) -> Self {
        self.w_angular = weight;
        self
    }

    /// Set the directional flag.
    #[must_use]
    pub const fn with_directional(mut self, directional: bool) -> Self {
        self.directional = directional;
        self
    }

    /// Set the tie-break policy.
    #[must_use]
    pub const fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}
