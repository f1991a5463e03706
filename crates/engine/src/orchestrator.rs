//! Cut orchestration: threading the accumulator through every intersecting
//! layer and assembling the replacement directive.

use std::collections::HashSet;

use log::warn;
use polycut_core::{
    CutLayer, CutOutcome, CuttingShape, Error, PolygonId, PolygonProvider, Region,
    ReplacementDirective, Result,
};

use crate::config::CutConfig;
use crate::cutter;
use crate::filter;

/// Drives a whole cut operation.
///
/// One invocation runs synchronously to completion and assumes exclusive
/// access to the canvas state for its duration; a concurrent host must
/// serialize entry per canvas. All intermediate regions are owned by the
/// call stack; only the [`CutOutcome`] escapes.
#[derive(Debug, Clone)]
pub struct CutEngine {
    config: CutConfig,
}

impl CutEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: CutConfig) -> Self {
        Self { config }
    }

    /// Creates an engine with default configuration.
    pub fn default_config() -> Self {
        Self::new(CutConfig::default())
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &CutConfig {
        &self.config
    }

    /// Cuts every intersecting canvas polygon against the drawn shape.
    ///
    /// The accumulator starts as the cutting shape and is folded through the
    /// filtered candidates in canvas order: each step replaces it with that
    /// candidate minus the area the accumulator covered, so later candidates
    /// cut against the shrinking result, not the original shape. Each step
    /// produces a new immutable region; nothing is shared between steps.
    ///
    /// A structurally malformed input (any participating ring with fewer
    /// than three distinct points) aborts the whole invocation with no
    /// directive, leaving the canvas untouched. A self-intersecting
    /// candidate is skipped with a warning and the cut continues.
    pub fn cut<P>(&self, cutting: &CuttingShape, canvas: &P) -> Result<CutOutcome>
    where
        P: PolygonProvider + ?Sized,
    {
        let entries = canvas.entries();

        cutting.polygon.validate()?;
        for entry in entries.iter().filter(|e| e.participates_in_cut) {
            entry.polygon.validate()?;
        }

        let exclude: HashSet<PolygonId> = std::iter::once(cutting.id.clone()).collect();
        let candidates = filter::candidates(entries, &cutting.polygon, &exclude, &self.config);

        let mut accumulator = Region::Single(cutting.polygon.clone());
        let mut style = cutting.options.clone();
        let mut consumed: Vec<PolygonId> = Vec::new();

        for candidate in candidates {
            match cutter::cut_one(candidate, &accumulator, &cutting.snap_entries, &self.config) {
                Ok(layer) => {
                    accumulator = layer.region;
                    style = layer.options;
                    consumed.push(candidate.id.clone());
                }
                Err(Error::SelfIntersecting(reason)) => {
                    warn!("skipping candidate: {reason}");
                }
                Err(err) => return Err(err),
            }
        }

        // The result replaces the drawn shape: style comes from the layer it
        // was last cut out of, interaction flags from the drawn shape.
        let mut options = style;
        options.editable = cutting.options.editable;
        options.snappable = cutting.options.snappable;

        let directive = ReplacementDirective {
            remove: consumed,
            discard: vec![cutting.id.clone()],
            add: accumulator
                .iter()
                .map(|polygon| CutLayer {
                    polygon: polygon.clone(),
                    options: options.clone(),
                })
                .collect(),
        };

        Ok(CutOutcome {
            result: accumulator,
            directive,
        })
    }
}
