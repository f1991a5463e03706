//! Canvas-side vocabulary: layer entries, options, and the polygon provider
//! seam between the host canvas and the cutting engine.

use crate::geometry::Polygon;
use crate::snap::SnapEntry;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for a canvas polygon.
pub type PolygonId = String;

/// Style and interaction metadata carried from a source polygon to the
/// layers that replace it after a cut.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayerOptions {
    /// Stroke color, as the host understands it.
    pub stroke_color: Option<String>,

    /// Fill color.
    pub fill_color: Option<String>,

    /// Stroke weight.
    pub stroke_weight: Option<f64>,

    /// Whether per-shape editing is enabled.
    pub editable: bool,

    /// Whether the shape participates in snapping while drawing.
    pub snappable: bool,
}

impl Default for LayerOptions {
    fn default() -> Self {
        Self {
            stroke_color: None,
            fill_color: None,
            stroke_weight: None,
            editable: false,
            snappable: true,
        }
    }
}

impl LayerOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stroke color.
    pub fn with_stroke_color(mut self, color: impl Into<String>) -> Self {
        self.stroke_color = Some(color.into());
        self
    }

    /// Sets the fill color.
    pub fn with_fill_color(mut self, color: impl Into<String>) -> Self {
        self.fill_color = Some(color.into());
        self
    }

    /// Sets the stroke weight.
    pub fn with_stroke_weight(mut self, weight: f64) -> Self {
        self.stroke_weight = Some(weight);
        self
    }

    /// Enables or disables per-shape editing.
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Enables or disables snapping participation.
    pub fn with_snappable(mut self, snappable: bool) -> Self {
        self.snappable = snappable;
        self
    }
}

/// One polygon on the canvas, as supplied by the polygon provider.
///
/// The host decides which of its layers take part in cutting and passes that
/// as the explicit `participates_in_cut` flag; entries with the flag cleared
/// are never considered, whatever their geometry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CanvasEntry {
    /// Unique identifier.
    pub id: PolygonId,

    /// The polygon geometry.
    pub polygon: Polygon,

    /// Style and interaction metadata.
    pub options: LayerOptions,

    /// Whether this layer takes part in cut operations.
    pub participates_in_cut: bool,
}

impl CanvasEntry {
    /// Creates an entry that participates in cutting, with default options.
    pub fn new(id: impl Into<PolygonId>, polygon: Polygon) -> Self {
        Self {
            id: id.into(),
            polygon,
            options: LayerOptions::default(),
            participates_in_cut: true,
        }
    }

    /// Sets the layer options.
    pub fn with_options(mut self, options: LayerOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets whether the layer takes part in cut operations.
    pub fn with_participation(mut self, participates: bool) -> Self {
        self.participates_in_cut = participates;
        self
    }
}

/// The cutting shape the user just drew, with the snap points recorded while
/// drawing it.
///
/// Transient: it exists for exactly one cut invocation and is discarded
/// (silently, without a layer-removed notification) when the cut completes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CuttingShape {
    /// Identifier of the drawn shape on the canvas.
    pub id: PolygonId,

    /// The drawn polygon.
    pub polygon: Polygon,

    /// Options of the drawn shape; the interaction flags are copied onto the
    /// final cut result, which replaces it.
    pub options: LayerOptions,

    /// Snap points recorded while drawing.
    pub snap_entries: Vec<SnapEntry>,
}

impl CuttingShape {
    /// Creates a cutting shape with no snap entries and default options.
    pub fn new(id: impl Into<PolygonId>, polygon: Polygon) -> Self {
        Self {
            id: id.into(),
            polygon,
            options: LayerOptions::default(),
            snap_entries: Vec::new(),
        }
    }

    /// Sets the drawn shape's options.
    pub fn with_options(mut self, options: LayerOptions) -> Self {
        self.options = options;
        self
    }

    /// Attaches the snap entries recorded while drawing.
    pub fn with_snap_entries(mut self, entries: Vec<SnapEntry>) -> Self {
        self.snap_entries = entries;
        self
    }
}

/// Supplies the polygons currently on the canvas, in insertion order.
///
/// Injected into the orchestrator so the engine never consults a process-wide
/// layer registry. Insertion order matters: it determines the order in which
/// successive differences are applied.
pub trait PolygonProvider {
    /// The canvas entries, in insertion order.
    fn entries(&self) -> &[CanvasEntry];
}

impl PolygonProvider for [CanvasEntry] {
    fn entries(&self) -> &[CanvasEntry] {
        self
    }
}

impl PolygonProvider for Vec<CanvasEntry> {
    fn entries(&self) -> &[CanvasEntry] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = LayerOptions::new()
            .with_stroke_color("#3388ff")
            .with_stroke_weight(2.0)
            .with_editable(true);

        assert_eq!(options.stroke_color.as_deref(), Some("#3388ff"));
        assert_eq!(options.stroke_weight, Some(2.0));
        assert!(options.editable);
        assert!(options.snappable);
    }

    #[test]
    fn test_entry_defaults() {
        let square = Polygon::new(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let entry = CanvasEntry::new("plot-1", square);
        assert!(entry.participates_in_cut);
        assert_eq!(entry.id, "plot-1");
    }
}
