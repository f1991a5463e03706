//! Single-layer cutter: the boolean difference of one candidate against the
//! cutting accumulator.

use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;
use polycut_core::{CanvasEntry, Error, Polygon, Region, Result, ResultLayer, Ring, SnapEntry};

use crate::config::CutConfig;
use crate::filter;
use crate::resolver;

/// A polygon in overlay form: one contour per ring, outer ring first.
type Shape = Vec<Vec<[f64; 2]>>;

/// Cuts one candidate layer against the accumulator.
///
/// The candidate's rings are deep-copied, recorded snap points are spliced
/// into the copy, and the copy minus the area covered by the accumulator
/// becomes the result, normalized so that exactly one remaining ring yields
/// a bare polygon rather than a one-element collection. The result carries
/// the candidate's style options.
///
/// A candidate that does not overlap the accumulator at all (including one
/// the filter admitted through its area-overlap fallback with zero actual
/// intersection) comes back unchanged. A self-intersecting candidate ring
/// fails with [`Error::SelfIntersecting`]; the orchestrator treats that as a
/// per-candidate failure, not an abort.
pub fn cut_one(
    candidate: &CanvasEntry,
    accumulator: &Region,
    snap_entries: &[SnapEntry],
    config: &CutConfig,
) -> Result<ResultLayer> {
    let mut copy = candidate.polygon.clone();
    resolver::insert_snap_points(&mut copy, snap_entries, config.snap_tolerance);

    if !copy.is_simple() {
        return Err(Error::SelfIntersecting(format!(
            "candidate '{}' has a self-intersecting ring",
            candidate.id
        )));
    }

    let subject = copy.rounded(config.precision);
    let clip: Vec<Polygon> = accumulator
        .iter()
        .map(|p| p.rounded(config.precision))
        .collect();

    if !clip.iter().any(|p| filter::overlaps(&subject, p)) {
        return Ok(ResultLayer {
            region: Region::Single(copy),
            options: candidate.options.clone(),
        });
    }

    // With even-odd filling, the accumulator's disjoint pieces and their
    // holes can ride along as contours of a single clip shape.
    let clip_shape: Shape = clip.iter().flat_map(to_shape).collect();
    let subject_shape = to_shape(&subject);
    let shapes = subject_shape.overlay(
        &clip_shape,
        OverlayRule::Difference,
        FillRule::EvenOdd,
    );

    Ok(ResultLayer {
        region: Region::from_polygons(from_shapes(shapes)),
        options: candidate.options.clone(),
    })
}

fn to_contour(ring: &[(f64, f64)]) -> Vec<[f64; 2]> {
    ring.iter().map(|&(x, y)| [x, y]).collect()
}

fn to_shape(polygon: &Polygon) -> Shape {
    let mut shape = Vec::with_capacity(1 + polygon.holes().len());
    shape.push(to_contour(polygon.exterior()));
    for hole in polygon.holes() {
        shape.push(to_contour(hole));
    }
    shape
}

/// Converts overlay output back to polygons. The first contour of each shape
/// is its outer ring, the rest are holes; degenerate contours and zero-area
/// shapes are dropped.
fn from_shapes(shapes: Vec<Shape>) -> Vec<Polygon> {
    shapes
        .into_iter()
        .filter_map(|shape| {
            let mut rings = shape
                .into_iter()
                .filter(|contour| contour.len() >= 3)
                .map(|contour| contour.into_iter().map(|[x, y]| (x, y)).collect::<Ring>());
            let exterior = rings.next()?;
            let polygon = Polygon::from_rings(exterior, rings.collect());
            (polygon.area() > 0.0).then_some(polygon)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(x: f64, y: f64, size: f64) -> Polygon {
        Polygon::new(vec![(x, y), (x + size, y), (x + size, y + size), (x, y + size)])
    }

    fn config() -> CutConfig {
        CutConfig::default()
    }

    #[test]
    fn test_partial_overlap_leaves_l_shape() {
        let candidate = CanvasEntry::new("c", square(1.0, 1.0, 2.0));
        let accumulator = Region::Single(square(0.0, 0.0, 2.0));

        let layer = cut_one(&candidate, &accumulator, &[], &config()).unwrap();
        assert_eq!(layer.region.len(), 1);
        assert_relative_eq!(layer.region.area(), 3.0, epsilon = 1e-9);
        assert!(!layer.is_consumed());
    }

    #[test]
    fn test_contained_candidate_is_consumed() {
        let candidate = CanvasEntry::new("c", square(1.0, 1.0, 1.0));
        let accumulator = Region::Single(square(0.0, 0.0, 4.0));

        let layer = cut_one(&candidate, &accumulator, &[], &config()).unwrap();
        assert!(layer.is_consumed());
        assert_eq!(layer.region.len(), 0);
    }

    #[test]
    fn test_no_overlap_passes_through_unchanged() {
        let candidate = CanvasEntry::new("c", square(10.0, 10.0, 2.0));
        let accumulator = Region::Single(square(0.0, 0.0, 2.0));

        let layer = cut_one(&candidate, &accumulator, &[], &config()).unwrap();
        assert_eq!(layer.region, Region::Single(square(10.0, 10.0, 2.0)));
    }

    #[test]
    fn test_empty_accumulator_passes_through() {
        let candidate = CanvasEntry::new("c", square(0.0, 0.0, 2.0));
        let accumulator = Region::Multi(Vec::new());

        let layer = cut_one(&candidate, &accumulator, &[], &config()).unwrap();
        assert_eq!(layer.region, Region::Single(square(0.0, 0.0, 2.0)));
    }

    #[test]
    fn test_split_produces_multi_region() {
        // a bar cut through the middle by a crossing bar falls into two pieces
        let candidate = CanvasEntry::new("bar", Polygon::new(vec![
            (0.0, 0.0),
            (3.0, 0.0),
            (3.0, 1.0),
            (0.0, 1.0),
        ]));
        let accumulator = Region::Single(Polygon::new(vec![
            (1.0, -1.0),
            (2.0, -1.0),
            (2.0, 2.0),
            (1.0, 2.0),
        ]));

        let layer = cut_one(&candidate, &accumulator, &[], &config()).unwrap();
        assert_eq!(layer.region.len(), 2);
        assert_relative_eq!(layer.region.area(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_conservation_up_to_snap_insertion() {
        // no overlap with the accumulator: the result is the candidate
        // vertex-for-vertex, plus the resolved snap vertex
        let candidate = CanvasEntry::new("c", square(0.0, 0.0, 4.0));
        let accumulator = Region::Single(square(5.0, 0.0, 2.0));
        let snaps = vec![SnapEntry::new((4.0, 2.0))];

        let layer = cut_one(&candidate, &accumulator, &snaps, &config()).unwrap();
        let Region::Single(result) = &layer.region else {
            panic!("expected a single polygon");
        };
        assert_eq!(
            result.exterior(),
            &[(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (4.0, 4.0), (0.0, 4.0)]
        );
    }

    #[test]
    fn test_touching_accumulator_removes_nothing() {
        let candidate = CanvasEntry::new("c", square(0.0, 0.0, 4.0));
        let accumulator = Region::Single(square(4.0, 0.0, 2.0));

        let layer = cut_one(&candidate, &accumulator, &[], &config()).unwrap();
        assert_eq!(layer.region.len(), 1);
        assert_relative_eq!(layer.region.area(), 16.0, epsilon = 1e-9);
    }

    #[test]
    fn test_self_intersecting_candidate_fails_locally() {
        let bowtie = Polygon::new(vec![(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)]);
        let candidate = CanvasEntry::new("bowtie", bowtie);
        let accumulator = Region::Single(square(0.0, 0.0, 2.0));

        let result = cut_one(&candidate, &accumulator, &[], &config());
        assert!(matches!(result, Err(Error::SelfIntersecting(_))));
    }

    #[test]
    fn test_original_candidate_is_not_mutated() {
        let original = square(0.0, 0.0, 4.0);
        let candidate = CanvasEntry::new("c", original.clone());
        let accumulator = Region::Single(square(2.0, 2.0, 4.0));
        let snaps = vec![SnapEntry::new((2.0, 0.0))];

        let _ = cut_one(&candidate, &accumulator, &snaps, &config()).unwrap();
        assert_eq!(candidate.polygon, original);
    }
}
