//! Robust geometric predicates and fixed-precision rounding.
//!
//! Boundary-crossing and simplicity tests must not flip their answer when
//! points are nearly collinear, so the orientation predicate is backed by
//! Shewchuk's adaptive precision arithmetic (via the `robust` crate). The
//! rest of this module is the small vector toolbox the cutting engine needs:
//! segment intersection, point-to-segment distance, signed ring area, and
//! the decimal rounding applied at the geometry interchange boundary.
//!
//! ## References
//!
//! - Shewchuk, J.R. (1997). "Adaptive Precision Floating-Point Arithmetic and
//!   Fast Robust Predicates for Computational Geometry"
//! - <https://www.cs.cmu.edu/~quake/robust.html>

use robust::{orient2d as robust_orient2d, Coord};

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are arranged counter-clockwise (left turn).
    CounterClockwise,
    /// Points are arranged clockwise (right turn).
    Clockwise,
    /// Points are collinear (on the same line).
    Collinear,
}

impl Orientation {
    /// Returns true if the orientation is counter-clockwise.
    #[inline]
    pub fn is_ccw(self) -> bool {
        matches!(self, Orientation::CounterClockwise)
    }

    /// Returns true if the orientation is clockwise.
    #[inline]
    pub fn is_cw(self) -> bool {
        matches!(self, Orientation::Clockwise)
    }

    /// Returns true if the points are collinear.
    #[inline]
    pub fn is_collinear(self) -> bool {
        matches!(self, Orientation::Collinear)
    }
}

/// Determines the orientation of three 2D points.
///
/// Numerically robust: near-degenerate inputs that would flip sign under
/// naive floating-point evaluation are classified correctly.
///
/// Returns [`Orientation::CounterClockwise`] if `pc` lies to the left of the
/// directed line from `pa` to `pb`, [`Orientation::Clockwise`] if it lies to
/// the right, and [`Orientation::Collinear`] otherwise.
#[inline]
pub fn orient2d(pa: (f64, f64), pb: (f64, f64), pc: (f64, f64)) -> Orientation {
    let result = robust_orient2d(
        Coord { x: pa.0, y: pa.1 },
        Coord { x: pb.0, y: pb.1 },
        Coord { x: pc.0, y: pc.1 },
    );

    if result > 0.0 {
        Orientation::CounterClockwise
    } else if result < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

// ============================================================================
// Segment Predicates
// ============================================================================

/// Checks whether a point known to be collinear with `a`-`b` lies within the
/// segment's bounding box (and therefore on the segment itself).
#[inline]
fn on_segment(a: (f64, f64), b: (f64, f64), q: (f64, f64)) -> bool {
    q.0 >= a.0.min(b.0) && q.0 <= a.0.max(b.0) && q.1 >= a.1.min(b.1) && q.1 <= a.1.max(b.1)
}

/// Tests whether the closed segments `p1`-`p2` and `q1`-`q2` intersect,
/// including touching at an endpoint and collinear overlap.
pub fn segments_intersect(
    p1: (f64, f64),
    p2: (f64, f64),
    q1: (f64, f64),
    q2: (f64, f64),
) -> bool {
    let d1 = orient2d(q1, q2, p1);
    let d2 = orient2d(q1, q2, p2);
    let d3 = orient2d(p1, p2, q1);
    let d4 = orient2d(p1, p2, q2);

    // Proper crossing: each segment's endpoints straddle the other's line.
    if ((d1.is_ccw() && d2.is_cw()) || (d1.is_cw() && d2.is_ccw()))
        && ((d3.is_ccw() && d4.is_cw()) || (d3.is_cw() && d4.is_ccw()))
    {
        return true;
    }

    // Degenerate cases: an endpoint lying on the other segment.
    (d1.is_collinear() && on_segment(q1, q2, p1))
        || (d2.is_collinear() && on_segment(q1, q2, p2))
        || (d3.is_collinear() && on_segment(p1, p2, q1))
        || (d4.is_collinear() && on_segment(p1, p2, q2))
}

/// Distance between two points.
#[inline]
pub fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}

/// Projects a point onto a line segment and returns the parameter t.
/// t=0 means at p1, t=1 means at p2.
pub fn project_point_to_segment(point: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let dx = p2.0 - p1.0;
    let dy = p2.1 - p1.1;
    let len_sq = dx * dx + dy * dy;
    if len_sq < 1e-20 {
        return 0.0;
    }
    let t = ((point.0 - p1.0) * dx + (point.1 - p1.1) * dy) / len_sq;
    t.clamp(0.0, 1.0)
}

/// Distance from a point to a line segment.
pub fn point_to_segment_distance(point: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let t = project_point_to_segment(point, p1, p2);
    let proj = (p1.0 + t * (p2.0 - p1.0), p1.1 + t * (p2.1 - p1.1));
    distance(point, proj)
}

/// Signed area of a ring (positive for counter-clockwise winding).
///
/// The ring is taken as open; the closing edge back to the first point is
/// implied.
pub fn signed_area(ring: &[(f64, f64)]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    let n = ring.len();
    for i in 0..n {
        let (x1, y1) = ring[i];
        let (x2, y2) = ring[(i + 1) % n];
        sum += x1 * y2 - x2 * y1;
    }

    sum / 2.0
}

// ============================================================================
// Fixed-Precision Rounding
// ============================================================================

/// Decimal coordinate rounding for the geometry interchange boundary.
///
/// Polygons cross the host boundary rounded to a fixed number of decimal
/// digits so the intersection predicates see identical inputs on both sides.
/// At the default 15 digits this is effectively the identity for canvas-scale
/// magnitudes; lower values coarsen deterministically.
#[derive(Debug, Clone, Copy)]
pub struct Rounding {
    scale: f64,
    inv_scale: f64,
}

impl Rounding {
    /// Creates a rounding that preserves `digits` decimal places.
    pub fn decimal_digits(digits: u32) -> Self {
        let scale = 10.0_f64.powi(digits as i32);
        Self {
            scale,
            inv_scale: 1.0 / scale,
        }
    }

    /// Rounds a single coordinate.
    #[inline]
    pub fn coord(&self, x: f64) -> f64 {
        (x * self.scale).round() * self.inv_scale
    }

    /// Rounds a point.
    #[inline]
    pub fn point(&self, p: (f64, f64)) -> (f64, f64) {
        (self.coord(p.0), self.coord(p.1))
    }

    /// Rounds an entire ring.
    pub fn ring(&self, ring: &[(f64, f64)]) -> Vec<(f64, f64)> {
        ring.iter().map(|&p| self.point(p)).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orient2d_basic() {
        // Counter-clockwise triangle
        let a = (0.0, 0.0);
        let b = (1.0, 0.0);
        let c = (0.5, 1.0);

        assert_eq!(orient2d(a, b, c), Orientation::CounterClockwise);
        assert_eq!(orient2d(a, c, b), Orientation::Clockwise);
    }

    #[test]
    fn test_orient2d_collinear() {
        let a = (0.0, 0.0);
        let b = (1.0, 1.0);
        let c = (2.0, 2.0);

        assert_eq!(orient2d(a, b, c), Orientation::Collinear);
    }

    #[test]
    fn test_segments_proper_crossing() {
        assert!(segments_intersect(
            (0.0, 0.0),
            (2.0, 2.0),
            (0.0, 2.0),
            (2.0, 0.0)
        ));
    }

    #[test]
    fn test_segments_disjoint() {
        assert!(!segments_intersect(
            (0.0, 0.0),
            (1.0, 0.0),
            (0.0, 1.0),
            (1.0, 1.0)
        ));
    }

    #[test]
    fn test_segments_touch_at_endpoint() {
        assert!(segments_intersect(
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 0.0),
            (2.0, 1.0)
        ));
    }

    #[test]
    fn test_segments_collinear_overlap() {
        assert!(segments_intersect(
            (0.0, 0.0),
            (2.0, 0.0),
            (1.0, 0.0),
            (3.0, 0.0)
        ));
    }

    #[test]
    fn test_segments_collinear_disjoint() {
        assert!(!segments_intersect(
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (3.0, 0.0)
        ));
    }

    #[test]
    fn test_point_to_segment_distance() {
        let d = point_to_segment_distance((1.0, 1.0), (0.0, 0.0), (2.0, 0.0));
        assert!((d - 1.0).abs() < 1e-12);

        // Beyond the endpoint the distance is to the endpoint itself
        let d = point_to_segment_distance((3.0, 0.0), (0.0, 0.0), (2.0, 0.0));
        assert!((d - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_signed_area() {
        let ccw = [(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)];
        assert!((signed_area(&ccw) - 4.0).abs() < 1e-12);

        let cw = [(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)];
        assert!((signed_area(&cw) + 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_rounding() {
        let r = Rounding::decimal_digits(2);
        assert!((r.coord(1.234) - 1.23).abs() < 1e-12);
        assert!((r.coord(1.239) - 1.24).abs() < 1e-12);

        let (x, y) = r.point((0.111, 0.999));
        assert!((x - 0.11).abs() < 1e-12);
        assert!((y - 1.0).abs() < 1e-12);
    }
}
