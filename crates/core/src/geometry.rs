//! Polygon and ring model shared by the cutting engine.

use crate::error::{Error, Result};
use crate::robust::{self, Rounding};
use crate::snap::RingRef;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One boundary loop: an ordered sequence of (x, y) coordinates, stored open
/// (the closing edge back to the first point is implied).
pub type Ring = Vec<(f64, f64)>;

/// A polygon with one outer ring and zero or more hole rings.
///
/// Coordinate storage is owned; cloning a polygon deep-copies every ring, so
/// cut results never alias the arrays of the layer they came from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    /// Outer boundary.
    exterior: Ring,

    /// Interior holes (if any).
    holes: Vec<Ring>,
}

/// Strips an explicit closing duplicate and consecutive duplicate points.
fn normalize_ring(mut ring: Ring) -> Ring {
    ring.dedup();
    while ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}

/// Counts pairwise-distinct points in a ring.
fn distinct_points(ring: &[(f64, f64)]) -> usize {
    let mut count = 0;
    for (i, p) in ring.iter().enumerate() {
        if !ring[..i].contains(p) {
            count += 1;
        }
    }
    count
}

/// Per-ring self-crossing test over all non-adjacent segment pairs.
///
/// Candidate rings stay in the tens-to-hundreds of vertices, so the
/// quadratic pair scan is fine.
fn ring_is_simple(ring: &[(f64, f64)]) -> bool {
    let n = ring.len();
    if n < 4 {
        return true;
    }

    for i in 0..n {
        let a1 = ring[i];
        let a2 = ring[(i + 1) % n];
        for j in (i + 2)..n {
            // Skip the two segments adjacent to segment i (shared endpoint).
            if i == 0 && j == n - 1 {
                continue;
            }
            let b1 = ring[j];
            let b2 = ring[(j + 1) % n];
            if robust::segments_intersect(a1, a2, b1, b2) {
                return false;
            }
        }
    }

    true
}

impl Polygon {
    /// Creates a polygon from its outer ring.
    ///
    /// An explicit closing duplicate and consecutive duplicate points are
    /// stripped.
    pub fn new(exterior: Ring) -> Self {
        Self {
            exterior: normalize_ring(exterior),
            holes: Vec::new(),
        }
    }

    /// Adds an interior hole ring.
    pub fn with_hole(mut self, ring: Ring) -> Self {
        self.holes.push(normalize_ring(ring));
        self
    }

    /// Creates a polygon from an outer ring plus hole rings.
    pub fn from_rings(exterior: Ring, holes: Vec<Ring>) -> Self {
        Self {
            exterior: normalize_ring(exterior),
            holes: holes.into_iter().map(normalize_ring).collect(),
        }
    }

    /// Returns the outer ring.
    pub fn exterior(&self) -> &[(f64, f64)] {
        &self.exterior
    }

    /// Returns the hole rings.
    pub fn holes(&self) -> &[Ring] {
        &self.holes
    }

    /// Returns the addressed ring, if it exists.
    pub fn ring(&self, ring: RingRef) -> Option<&Ring> {
        match ring {
            RingRef::Outer => Some(&self.exterior),
            RingRef::Hole(i) => self.holes.get(i),
        }
    }

    /// Returns the addressed ring mutably, if it exists.
    pub fn ring_mut(&mut self, ring: RingRef) -> Option<&mut Ring> {
        match ring {
            RingRef::Outer => Some(&mut self.exterior),
            RingRef::Hole(i) => self.holes.get_mut(i),
        }
    }

    /// Iterates over all rings with their addresses, outer ring first.
    pub fn rings(&self) -> impl Iterator<Item = (RingRef, &Ring)> {
        std::iter::once((RingRef::Outer, &self.exterior)).chain(
            self.holes
                .iter()
                .enumerate()
                .map(|(i, ring)| (RingRef::Hole(i), ring)),
        )
    }

    /// Unsigned area: the outer ring's area minus the holes'.
    pub fn area(&self) -> f64 {
        let outer = robust::signed_area(&self.exterior).abs();
        let holes: f64 = self
            .holes
            .iter()
            .map(|h| robust::signed_area(h).abs())
            .sum();
        (outer - holes).max(0.0)
    }

    /// Axis-aligned bounding box of the outer ring.
    pub fn aabb(&self) -> Aabb {
        Aabb::of_ring(&self.exterior)
    }

    /// Checks that every ring has at least three distinct points.
    pub fn validate(&self) -> Result<()> {
        if distinct_points(&self.exterior) < 3 {
            return Err(Error::MalformedGeometry(
                "outer ring must have at least 3 distinct points".into(),
            ));
        }
        for (i, hole) in self.holes.iter().enumerate() {
            if distinct_points(hole) < 3 {
                return Err(Error::MalformedGeometry(format!(
                    "hole ring {i} must have at least 3 distinct points"
                )));
            }
        }
        Ok(())
    }

    /// Returns true when no ring crosses itself.
    pub fn is_simple(&self) -> bool {
        ring_is_simple(&self.exterior) && self.holes.iter().all(|h| ring_is_simple(h))
    }

    /// Returns a copy rounded to `digits` decimal places, as applied at the
    /// geometry interchange boundary.
    pub fn rounded(&self, digits: u32) -> Polygon {
        let rounding = Rounding::decimal_digits(digits);
        Polygon {
            exterior: normalize_ring(rounding.ring(&self.exterior)),
            holes: self
                .holes
                .iter()
                .map(|h| normalize_ring(rounding.ring(h)))
                .collect(),
        }
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Aabb {
    /// Creates a bounding box from its corners.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Bounding box of a ring. An empty ring yields a degenerate box at the
    /// origin.
    pub fn of_ring(ring: &[(f64, f64)]) -> Self {
        if ring.is_empty() {
            return Self::new(0.0, 0.0, 0.0, 0.0);
        }

        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;

        for &(x, y) in ring {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }

        Self::new(min_x, min_y, max_x, max_y)
    }

    /// Returns true when the boxes overlap or touch.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }
}

/// A region of the plane: either one polygon or a collection of disjoint
/// polygons produced when a cut splits its input.
///
/// The two shapes are equivalent inputs to the next cut step; a one-element
/// collection is always normalized to [`Region::Single`] by
/// [`Region::from_polygons`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Region {
    /// A single polygon.
    Single(Polygon),
    /// Zero or several disjoint polygons.
    Multi(Vec<Polygon>),
}

impl Region {
    /// Wraps a polygon collection, collapsing a one-element collection to the
    /// bare polygon form.
    pub fn from_polygons(mut polygons: Vec<Polygon>) -> Self {
        if polygons.len() == 1 {
            Region::Single(polygons.remove(0))
        } else {
            Region::Multi(polygons)
        }
    }

    /// Iterates over the contained polygons.
    pub fn iter(&self) -> std::slice::Iter<'_, Polygon> {
        match self {
            Region::Single(p) => std::slice::from_ref(p).iter(),
            Region::Multi(ps) => ps.iter(),
        }
    }

    /// Number of contained polygons.
    pub fn len(&self) -> usize {
        match self {
            Region::Single(_) => 1,
            Region::Multi(ps) => ps.len(),
        }
    }

    /// Returns true when the region contains no polygons (the input was
    /// entirely inside the cutting shape).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the region into its polygon collection.
    pub fn into_polygons(self) -> Vec<Polygon> {
        match self {
            Region::Single(p) => vec![p],
            Region::Multi(ps) => ps,
        }
    }

    /// Total area over all contained polygons.
    pub fn area(&self) -> f64 {
        self.iter().map(Polygon::area).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closing_duplicate_stripped() {
        let p = Polygon::new(vec![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0)]);
        assert_eq!(p.exterior().len(), 4);
    }

    #[test]
    fn test_consecutive_duplicates_stripped() {
        let p = Polygon::new(vec![(0.0, 0.0), (2.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        assert_eq!(p.exterior().len(), 4);
    }

    #[test]
    fn test_area_with_hole() {
        let p = Polygon::new(vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])
            .with_hole(vec![(2.0, 2.0), (5.0, 2.0), (5.0, 5.0), (2.0, 5.0)]);
        assert!((p.area() - 91.0).abs() < 1e-9);
    }

    #[test]
    fn test_aabb() {
        let p = Polygon::new(vec![(1.0, 2.0), (5.0, 2.0), (5.0, 8.0), (1.0, 8.0)]);
        let aabb = p.aabb();
        assert_eq!(aabb.min_x, 1.0);
        assert_eq!(aabb.min_y, 2.0);
        assert_eq!(aabb.max_x, 5.0);
        assert_eq!(aabb.max_y, 8.0);
    }

    #[test]
    fn test_aabb_intersects() {
        let a = Aabb::new(0.0, 0.0, 2.0, 2.0);
        let b = Aabb::new(1.0, 1.0, 3.0, 3.0);
        let c = Aabb::new(5.0, 5.0, 6.0, 6.0);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));

        // Touching boxes count as intersecting
        let d = Aabb::new(2.0, 0.0, 4.0, 2.0);
        assert!(a.intersects(&d));
    }

    #[test]
    fn test_validate_rejects_degenerate() {
        let p = Polygon::new(vec![(0.0, 0.0), (1.0, 0.0)]);
        assert!(p.validate().is_err());

        // Three points but only two distinct
        let p = Polygon::new(vec![(0.0, 0.0), (1.0, 0.0), (0.0, 0.0), (1.0, 0.0)]);
        assert!(p.validate().is_err());

        let p = Polygon::new(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_bowtie_is_not_simple() {
        let p = Polygon::new(vec![(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)]);
        assert!(!p.is_simple());
    }

    #[test]
    fn test_square_is_simple() {
        let p = Polygon::new(vec![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        assert!(p.is_simple());
    }

    #[test]
    fn test_rounded() {
        let p = Polygon::new(vec![(0.004, 0.0), (1.996, 0.0), (1.996, 2.004), (0.004, 2.004)]);
        let r = p.rounded(2);
        assert_eq!(r.exterior()[1], (2.0, 0.0));
    }

    #[test]
    fn test_region_normalization() {
        let square = Polygon::new(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);

        let one = Region::from_polygons(vec![square.clone()]);
        assert!(matches!(one, Region::Single(_)));
        assert_eq!(one.len(), 1);

        let two = Region::from_polygons(vec![square.clone(), square.clone()]);
        assert!(matches!(two, Region::Multi(_)));
        assert_eq!(two.len(), 2);

        let none = Region::from_polygons(Vec::new());
        assert!(none.is_empty());
    }
}
