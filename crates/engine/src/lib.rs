//! # Polycut Engine
//!
//! A polygon cutting engine: given a closed cutting shape drawn by a user
//! and the polygons on a shared canvas, it computes the geometric difference
//! of each intersecting polygon against the evolving cutting accumulator,
//! re-inserts snapped vertices that lay exactly on a cut boundary, and hands
//! the host a replacement directive to apply atomically.
//!
//! ## Components
//!
//! - [`candidates`]: intersection filter: which canvas polygons does the
//!   cutting shape hit (boundary crossing, then area-overlap fallback)
//! - [`insert_snap_points`]: snap resolver: splices recorded snap points
//!   into the rings they lie on
//! - [`cut_one`]: single-layer cutter: one candidate minus the accumulator,
//!   normalized to a bare polygon or a multi-polygon collection
//! - [`CutEngine`]: orchestrator: folds the accumulator through the
//!   filtered candidates and assembles the [`ReplacementDirective`]
//!
//! ## Quick Start
//!
//! ```rust
//! use polycut_engine::{CanvasEntry, CutEngine, CuttingShape, Polygon};
//!
//! // One existing plot on the canvas
//! let canvas = vec![CanvasEntry::new(
//!     "plot-1",
//!     Polygon::new(vec![(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]),
//! )];
//!
//! // The square the user just drew across its corner
//! let cutting = CuttingShape::new(
//!     "drawn",
//!     Polygon::new(vec![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]),
//! );
//!
//! let outcome = CutEngine::default_config().cut(&cutting, &canvas).unwrap();
//!
//! // The plot is replaced by its L-shaped remainder; the drawn shape is
//! // discarded silently.
//! assert_eq!(outcome.directive.remove, vec!["plot-1".to_string()]);
//! assert_eq!(outcome.directive.discard, vec!["drawn".to_string()]);
//! assert_eq!(outcome.directive.add.len(), 1);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support
//!
//! The engine performs no I/O and installs no logger; diagnostics go through
//! the `log` facade.

pub mod config;
pub mod cutter;
pub mod filter;
pub mod orchestrator;
pub mod resolver;

// Re-exports
pub use config::CutConfig;
pub use cutter::cut_one;
pub use filter::candidates;
pub use orchestrator::CutEngine;
pub use resolver::insert_snap_points;

pub use polycut_core::{
    Aabb, CanvasEntry, CutLayer, CutOutcome, CuttingShape, Error, LayerOptions, Polygon,
    PolygonId, PolygonProvider, Region, ReplacementDirective, Result, ResultLayer, Ring, RingRef,
    SegmentRef, SnapEntry,
};
