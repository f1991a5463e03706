//! Cut result representation.

use crate::canvas::{LayerOptions, PolygonId};
use crate::geometry::{Polygon, Region};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of cutting one candidate layer against the accumulator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResultLayer {
    /// The remaining geometry, normalized: a bare polygon when the
    /// difference produced exactly one ring, a collection otherwise.
    pub region: Region,

    /// Style metadata carried over from the candidate, so downstream
    /// consumers can reconstruct equivalent visual layers.
    pub options: LayerOptions,
}

impl ResultLayer {
    /// True when the difference left no area: the candidate lay entirely
    /// inside the cutting accumulator and is fully consumed.
    pub fn is_consumed(&self) -> bool {
        self.region.is_empty()
    }
}

/// One output layer to add to the canvas.
///
/// Added layers are cut results; the host registers them the same way it
/// registers user-drawn shapes, so interaction-mode toggles (per-shape
/// editing on/off and the like) route to them correctly.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CutLayer {
    /// The output polygon.
    pub polygon: Polygon,

    /// Style from the source polygon, interaction flags from the cutting
    /// shape it replaces.
    pub options: LayerOptions,
}

/// The canvas mutation a completed cut asks the host to apply atomically.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReplacementDirective {
    /// Consumed candidates, removed with the usual layer-removed
    /// notification.
    pub remove: Vec<PolygonId>,

    /// The transient cutting shape, removed silently: its disappearance must
    /// not re-trigger the host's layer-removed side effects.
    pub discard: Vec<PolygonId>,

    /// Output layers to add. Empty when the cutting shape was entirely
    /// consumed by the overlaps; removal is signalled instead of an empty
    /// shape being inserted.
    pub add: Vec<CutLayer>,
}

/// Everything a finished cut hands back to the caller: the final accumulator
/// and the replacement directive. `directive.remove` doubles as the
/// consumed-originals list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CutOutcome {
    /// The final cutting accumulator after every per-candidate difference.
    pub result: Region,

    /// The canvas mutation to apply.
    pub directive: ReplacementDirective,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumed_flag() {
        let layer = ResultLayer {
            region: Region::Multi(Vec::new()),
            options: LayerOptions::default(),
        };
        assert!(layer.is_consumed());

        let square = Polygon::new(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let layer = ResultLayer {
            region: Region::Single(square),
            options: LayerOptions::default(),
        };
        assert!(!layer.is_consumed());
    }
}
