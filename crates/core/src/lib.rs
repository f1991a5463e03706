//! # Polycut Core
//!
//! Shared types and predicates for the polycut polygon cutting engine.
//!
//! This crate holds the vocabulary exchanged between a host canvas and the
//! cutting engine, plus the robust geometric predicates the engine's tests
//! are built on. The engine itself (intersection filtering, snap-vertex
//! insertion, boolean differences, orchestration) lives in `polycut-engine`.
//!
//! ## Core Components
//!
//! - **Geometry**: [`Polygon`], [`Ring`], [`Region`], [`Aabb`]
//! - **Canvas vocabulary**: [`CanvasEntry`], [`CuttingShape`],
//!   [`LayerOptions`], [`PolygonProvider`]
//! - **Snap records**: [`SnapEntry`], [`SegmentRef`], [`RingRef`]
//! - **Results**: [`ResultLayer`], [`CutLayer`], [`ReplacementDirective`],
//!   [`CutOutcome`]
//! - **Predicates**: [`robust`]: orientation, segment intersection,
//!   point-to-segment distance, fixed-precision rounding
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod canvas;
pub mod error;
pub mod geometry;
pub mod result;
pub mod robust;
pub mod snap;

// Re-exports
pub use canvas::{CanvasEntry, CuttingShape, LayerOptions, PolygonId, PolygonProvider};
pub use error::{Error, Result};
pub use geometry::{Aabb, Polygon, Region, Ring};
pub use result::{CutLayer, CutOutcome, ReplacementDirective, ResultLayer};
pub use snap::{RingRef, SegmentRef, SnapEntry};
