//! Legal road limits.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed regulatory thresholds beyond which permits are required.
///
/// Defaults are the common US interstate limits in feet and pounds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LegalLimits {
    /// Maximum total height (cargo height + deck height) without a permit.
    pub max_height: f64,

    /// Maximum cargo width without a permit.
    pub max_width: f64,

    /// Maximum gross weight (cargo + tare + tractor) without a permit.
    pub max_gross_weight: f64,

    /// Fixed tractor weight counted toward gross weight.
    pub tractor_weight: f64,

    /// Width beyond which escort vehicles are required.
    pub escort_width: f64,
}

impl Default for LegalLimits {
    fn default() -> Self {
        Self {
            max_height: 13.5,
            max_width: 8.5,
            max_gross_weight: 80000.0,
            tractor_weight: 17000.0,
            escort_width: 12.0,
        }
    }
}

impl LegalLimits {
    /// Creates limits with the default road thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum legal total height.
    pub fn with_max_height(mut self, height: f64) -> Self {
        self.max_height = height;
        self
    }

    /// Sets the maximum legal cargo width.
    pub fn with_max_width(mut self, width: f64) -> Self {
        self.max_width = width;
        self
    }

    /// Sets the maximum legal gross weight.
    pub fn with_max_gross_weight(mut self, weight: f64) -> Self {
        self.max_gross_weight = weight;
        self
    }

    /// Sets the fixed tractor weight.
    pub fn with_tractor_weight(mut self, weight: f64) -> Self {
        self.tractor_weight = weight;
        self
    }
}
