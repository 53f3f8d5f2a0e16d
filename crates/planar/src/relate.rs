use geo::{Area, Contains, Distance, Euclidean, MultiPolygon, Point};

use crate::ops::{intersection, outside};
use crate::region::Region;

/// Relationship between two closed regions `a` and `b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Containment {
    /// No shared area beyond the tolerance (includes touching at points or along edges).
    Disjoint,
    /// Each region has area outside the other.
    MutualIntersection,
    /// `a` lies inside `b`.
    AInsideB,
    /// `b` lies inside `a`.
    BInsideA,
}

/// Position of a point relative to a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointContainment {
    Inside,
    Outside,
    /// Within tolerance of the boundary.
    Coincident,
}

/// Classify how `b` sits relative to `a`.
///
/// Tolerance is a distance: `b` is inside `a` when every part of `b` outside
/// `a` lies within `tolerance` of `a`'s boundary, and the two are disjoint
/// when their overlap is no wider than `tolerance` on either side. Shared
/// edges and corners are disjoint. When both regions qualify as inside each
/// other (coincident outlines) the result is `BInsideA`.
pub fn relationship(a: &Region, b: &Region, tolerance: f64) -> Containment {
    if !bounds_overlap(a, b, tolerance) { return Containment::Disjoint }

    let shared = intersection(a, b);
    if !(shared.unsigned_area() > 0.0) { return Containment::Disjoint }

    if near_boundary(&outside(b, a), a, tolerance) { return Containment::BInsideA }
    if near_boundary(&outside(a, b), b, tolerance) { return Containment::AInsideB }
    if near_boundary(&shared, a, tolerance) && near_boundary(&shared, b, tolerance) {
        return Containment::Disjoint;
    }

    Containment::MutualIntersection
}

/// True iff `candidate` lies fully inside `outer`.
#[inline]
pub fn is_inside(outer: &Region, candidate: &Region, tolerance: f64) -> bool {
    relationship(outer, candidate, tolerance) == Containment::BInsideA
}

/// True iff `candidate` lies inside `outer` or crosses its boundary.
#[inline]
pub fn inside_or_intersecting(outer: &Region, candidate: &Region, tolerance: f64) -> bool {
    matches!(
        relationship(outer, candidate, tolerance),
        Containment::BInsideA | Containment::MutualIntersection
    )
}

/// Locate `point` relative to `region`, treating anything within `tolerance`
/// of a boundary ring as coincident.
pub fn contains_point(region: &Region, point: Point<f64>, tolerance: f64) -> PointContainment {
    if boundary_distance(region, point) <= tolerance {
        PointContainment::Coincident
    } else if region.polygon().contains(&point) {
        PointContainment::Inside
    } else {
        PointContainment::Outside
    }
}

/// Shortest distance from `point` to any boundary ring of `region`, holes included.
pub fn boundary_distance(region: &Region, point: Point<f64>) -> f64 {
    let polygon = region.polygon();
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(|ring| Euclidean.distance(&point, ring))
        .fold(f64::INFINITY, f64::min)
}

/// Every vertex of `shapes` lies within `tolerance` of `region`'s boundary.
/// Trivially true when `shapes` is empty.
fn near_boundary(shapes: &MultiPolygon<f64>, region: &Region, tolerance: f64) -> bool {
    shapes.0.iter()
        .flat_map(|polygon| std::iter::once(polygon.exterior()).chain(polygon.interiors()))
        .flat_map(|ring| ring.coords())
        .all(|&c| boundary_distance(region, c.into()) <= tolerance)
}

/// Bounding rectangles overlap once grown by `tolerance`.
fn bounds_overlap(a: &Region, b: &Region, tolerance: f64) -> bool {
    let (ra, rb) = (a.bounds(), b.bounds());
    ra.min().x - tolerance <= rb.max().x && rb.min().x - tolerance <= ra.max().x
        && ra.min().y - tolerance <= rb.max().y && rb.min().y - tolerance <= ra.max().y
}
