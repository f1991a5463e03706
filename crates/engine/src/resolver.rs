//! Snap resolution: splicing recorded snap points back into the rings they
//! lie on, so edges stay aligned across a cut.

use log::debug;
use polycut_core::robust;
use polycut_core::{Polygon, RingRef, SnapEntry};

/// The segment of a ring closest to a snap point.
#[derive(Debug, Clone, Copy)]
struct SegmentMatch {
    ring: RingRef,
    index: usize,
    distance: f64,
}

/// Inserts each resolvable snap point into the polygon's rings.
///
/// Entries are processed in input order, each resolved against the ring
/// state at the time of its insertion, so earlier insertions shift later
/// ones naturally. Existing points are never reordered, only added to.
///
/// An entry is inserted when its nearest segment lies within `tolerance`
/// (inclusive, so a point exactly at the threshold still counts); anything
/// farther is skipped without error. A point coinciding with a segment
/// endpoint is skipped too, since rings never carry consecutive duplicates.
pub fn insert_snap_points(polygon: &mut Polygon, entries: &[SnapEntry], tolerance: f64) {
    for entry in entries {
        let restrict = entry.segment_hint.map(|hint| hint.ring);
        let Some(found) = nearest_segment(polygon, entry.point, restrict) else {
            continue;
        };

        if found.distance > tolerance {
            debug!(
                "snap point ({}, {}) is {} from its nearest segment, beyond tolerance {}; skipped",
                entry.point.0, entry.point.1, found.distance, tolerance
            );
            continue;
        }

        if let Some(ring) = polygon.ring_mut(found.ring) {
            let n = ring.len();
            let a = ring[found.index];
            let b = ring[(found.index + 1) % n];
            if entry.point == a || entry.point == b {
                continue;
            }
            ring.insert(found.index + 1, entry.point);
        }
    }
}

/// Nearest-segment search over the polygon's rings.
///
/// When `restrict` names a ring (from a snap entry's segment hint), only
/// that ring is searched; a hint addressing a ring the polygon does not have
/// falls back to the full search. Ties go to whichever ring is scanned
/// first: the outer ring, then holes in index order.
fn nearest_segment(
    polygon: &Polygon,
    point: (f64, f64),
    restrict: Option<RingRef>,
) -> Option<SegmentMatch> {
    let mut best: Option<SegmentMatch> = None;

    for (ring_ref, ring) in polygon.rings() {
        if restrict.is_some_and(|r| r != ring_ref) {
            continue;
        }

        let n = ring.len();
        if n < 2 {
            continue;
        }

        for i in 0..n {
            let d = robust::point_to_segment_distance(point, ring[i], ring[(i + 1) % n]);
            if best.as_ref().is_none_or(|b| d < b.distance) {
                best = Some(SegmentMatch {
                    ring: ring_ref,
                    index: i,
                    distance: d,
                });
            }
        }
    }

    if best.is_none() && restrict.is_some() {
        return nearest_segment(polygon, point, None);
    }

    best
}
