//! Snap records: points known to lie exactly on an edge being cut.
//!
//! The drawing subsystem records these while the user traces the cutting
//! shape. Re-inserting them as explicit vertices before the boolean
//! difference keeps adjacent edges precisely aligned after the cut.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Addresses one ring of a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RingRef {
    /// The outer boundary ring.
    Outer,
    /// A hole ring, by index.
    Hole(usize),
}

/// Addresses one segment of a ring: from index `start` to the next ring
/// index (wrapping back to the first point).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentRef {
    /// The ring the segment belongs to.
    pub ring: RingRef,
    /// Index of the segment's earlier endpoint.
    pub start: usize,
}

/// A point the snapping subsystem recorded as lying on an edge of a polygon
/// about to be cut.
///
/// Snap entries are read-only inputs to one cut invocation; they are created
/// when the cut starts and discarded when it completes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SnapEntry {
    /// The snapped coordinate.
    pub point: (f64, f64),
    /// The segment the snapper matched, when it recorded one. Resolution
    /// restricts its nearest-segment search to the hinted ring.
    pub segment_hint: Option<SegmentRef>,
}

impl SnapEntry {
    /// Creates an entry with no segment hint.
    pub fn new(point: (f64, f64)) -> Self {
        Self {
            point,
            segment_hint: None,
        }
    }

    /// Attaches a segment hint.
    pub fn with_hint(mut self, hint: SegmentRef) -> Self {
        self.segment_hint = Some(hint);
        self
    }
}
