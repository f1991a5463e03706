//! Intersection filter: which canvas polygons does the cutting shape hit?

use std::collections::HashSet;

use geo::{Coord, Intersects, LineString, Polygon as GeoPolygon};
use log::warn;
use polycut_core::robust;
use polycut_core::{CanvasEntry, Polygon, PolygonId};

use crate::config::CutConfig;

/// Selects the canvas entries the cutting shape intersects, preserving
/// canvas insertion order.
///
/// Entries that do not participate in cutting, entries named in `exclude`
/// (the cutting shape itself and anything already consumed in the current
/// pass), and self-intersecting entries are skipped. The remaining entries
/// are tested at the interchange precision: first for a boundary crossing,
/// then, failing that, for area overlap with a general polygon-intersection
/// predicate.
///
/// A self-intersecting cutting shape cannot cut anything; the filter warns
/// once and returns no candidates, leaving the rest of the operation to
/// hand the drawn shape back unchanged.
pub fn candidates<'a>(
    entries: &'a [CanvasEntry],
    cutting: &Polygon,
    exclude: &HashSet<PolygonId>,
    config: &CutConfig,
) -> Vec<&'a CanvasEntry> {
    let cutting = cutting.rounded(config.precision);

    if !cutting.is_simple() {
        warn!("cutting shape is self-intersecting; polygons with self-intersections cannot cut");
        return Vec::new();
    }

    let cutting_aabb = cutting.aabb();
    let cutting_geo = to_geo_polygon(&cutting);

    entries
        .iter()
        .filter(|entry| entry.participates_in_cut)
        .filter(|entry| !exclude.contains(&entry.id))
        .filter(|entry| {
            let candidate = entry.polygon.rounded(config.precision);

            if !candidate.is_simple() {
                warn!(
                    "excluding '{}' from cut: polygons with self-intersections are not supported",
                    entry.id
                );
                return false;
            }

            if !cutting_aabb.intersects(&candidate.aabb()) {
                return false;
            }

            boundaries_cross(&cutting, &candidate) || cutting_geo.intersects(&to_geo_polygon(&candidate))
        })
        .collect()
}

/// True when the two polygons overlap or touch: a cheap bounding-box reject,
/// then a boundary crossing, then the general area-overlap predicate.
///
/// Used by the cutter to decide whether a candidate needs a difference at
/// all; a candidate that never meets the accumulator passes through a cut
/// unchanged.
pub(crate) fn overlaps(a: &Polygon, b: &Polygon) -> bool {
    if !a.aabb().intersects(&b.aabb()) {
        return false;
    }
    boundaries_cross(a, b) || to_geo_polygon(a).intersects(&to_geo_polygon(b))
}

/// Tests every segment of every ring of `a` against every segment of every
/// ring of `b` for an intersection.
fn boundaries_cross(a: &Polygon, b: &Polygon) -> bool {
    a.rings()
        .any(|(_, ring_a)| b.rings().any(|(_, ring_b)| rings_cross(ring_a, ring_b)))
}

fn rings_cross(a: &[(f64, f64)], b: &[(f64, f64)]) -> bool {
    let na = a.len();
    let nb = b.len();
    if na < 2 || nb < 2 {
        return false;
    }

    for i in 0..na {
        let a1 = a[i];
        let a2 = a[(i + 1) % na];
        for j in 0..nb {
            let b1 = b[j];
            let b2 = b[(j + 1) % nb];
            if robust::segments_intersect(a1, a2, b1, b2) {
                return true;
            }
        }
    }

    false
}

/// Converts to a geo crate polygon. Rings are stored open; `geo` closes them
/// on construction.
pub(crate) fn to_geo_polygon(polygon: &Polygon) -> GeoPolygon<f64> {
    let exterior = LineString::from(
        polygon
            .exterior()
            .iter()
            .map(|&(x, y)| Coord { x, y })
            .collect::<Vec<_>>(),
    );

    let holes: Vec<LineString<f64>> = polygon
        .holes()
        .iter()
        .map(|hole| {
            LineString::from(hole.iter().map(|&(x, y)| Coord { x, y }).collect::<Vec<_>>())
        })
        .collect();

    GeoPolygon::new(exterior, holes)
}
