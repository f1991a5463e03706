//! Configuration for cut operations.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration parameters for a cut.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CutConfig {
    /// Maximum distance between a recorded snap point and its matched
    /// segment, in coordinate units. Entries farther away are skipped; a
    /// point exactly at this distance is still inserted.
    pub snap_tolerance: f64,

    /// Decimal digits preserved when geometry is rounded at the interchange
    /// boundary, keeping the intersection tests deterministic on both sides
    /// of it.
    pub precision: u32,
}

impl Default for CutConfig {
    fn default() -> Self {
        Self {
            // suits full-precision geodata; coarser inputs may need more
            snap_tolerance: 1e-6,
            precision: 15,
        }
    }
}

impl CutConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the snap tolerance.
    pub fn with_snap_tolerance(mut self, tolerance: f64) -> Self {
        self.snap_tolerance = tolerance;
        self
    }

    /// Sets the interchange precision in decimal digits.
    pub fn with_precision(mut self, digits: u32) -> Self {
        self.precision = digits;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CutConfig::default();
        assert_eq!(config.precision, 15);
        assert!(config.snap_tolerance > 0.0);
    }

    #[test]
    fn test_builder() {
        let config = CutConfig::new().with_snap_tolerance(0.5).with_precision(9);
        assert_eq!(config.snap_tolerance, 0.5);
        assert_eq!(config.precision, 9);
    }
}
