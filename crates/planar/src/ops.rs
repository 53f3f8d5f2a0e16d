use geo::{BooleanOps, MultiPolygon, Polygon};

use crate::region::Region;

/// Boolean union of all `regions`, split back into connected regions.
/// Returns an empty vector when nothing survives the operation.
pub fn union(regions: &[Region]) -> Vec<Region> {
    regions.iter()
        .map(|region| single(region.polygon()))
        .reduce(|a, b| a.union(&b))
        .map(into_regions)
        .unwrap_or_default()
}

/// Subtract every region in `cutters` from `base`.
pub fn difference(base: &Region, cutters: &[Region]) -> Vec<Region> {
    let remaining = cutters.iter()
        .fold(single(base.polygon()), |acc, cutter| acc.difference(&single(cutter.polygon())));
    into_regions(remaining)
}

/// Each boundary ring of `region` (exterior and holes) as its own filled region.
///
/// This is the curve view of a region: a courtyard hole becomes a separate
/// closed outline lying inside the exterior outline.
pub fn fill_rings(region: &Region) -> Vec<Region> {
    std::iter::once(region.exterior())
        .chain(region.polygon().interiors())
        .filter_map(|ring| Region::from_ring(ring.clone()).ok())
        .collect()
}

/// Part of the plane covered by both `a` and `b`.
#[inline]
pub(crate) fn intersection(a: &Region, b: &Region) -> MultiPolygon<f64> {
    a.polygon().intersection(b.polygon())
}

/// Part of `region` lying outside `other`.
#[inline]
pub(crate) fn outside(region: &Region, other: &Region) -> MultiPolygon<f64> {
    region.polygon().difference(other.polygon())
}

#[inline]
fn single(polygon: &Polygon<f64>) -> MultiPolygon<f64> {
    MultiPolygon::new(vec![polygon.clone()])
}

/// Degenerate slivers left behind by the boolean engine are dropped.
fn into_regions(shapes: MultiPolygon<f64>) -> Vec<Region> {
    shapes.0.into_iter()
        .filter_map(|polygon| Region::from_polygon(polygon).ok())
        .collect()
}
