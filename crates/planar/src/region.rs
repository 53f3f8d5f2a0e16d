use std::fmt;

use geo::{Area, Centroid, Coord, LineString, Point, Polygon, Rect};

use crate::curve::Circle;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Reasons a ring cannot form a `Region`.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionError {
    /// A coordinate is NaN or infinite.
    NonFinite,
    /// Fewer than three distinct vertices (count given).
    TooFewVertices(usize),
    /// The ring encloses no area.
    ZeroArea,
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionError::NonFinite => write!(f, "ring has a non-finite coordinate"),
            RegionError::TooFewVertices(n) => write!(f, "ring has {n} distinct vertices, need at least 3"),
            RegionError::ZeroArea => write!(f, "ring encloses no area"),
        }
    }
}

impl std::error::Error for RegionError {}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A closed planar region with a well-defined interior.
///
/// Built once from a ring (or a polygon produced by a boolean operation) and
/// never mutated afterwards. The unsigned area is cached at construction since
/// every containment test and stencil computation needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    polygon: Polygon<f64>,
    area: f64,
}

impl Region {
    /// Build a region from a single ring. The ring is closed if needed.
    pub fn from_ring(ring: LineString<f64>) -> Result<Self, RegionError> {
        Self::from_polygon(Polygon::new(ring, vec![]))
    }

    /// Build a region from a polygon, which may carry holes.
    pub fn from_polygon(polygon: Polygon<f64>) -> Result<Self, RegionError> {
        let exterior = polygon.exterior();
        if !exterior.0.iter().all(|c| c.x.is_finite() && c.y.is_finite()) {
            return Err(RegionError::NonFinite);
        }

        let distinct = distinct_vertices(exterior);
        if distinct < 3 { return Err(RegionError::TooFewVertices(distinct)) }

        let area = polygon.unsigned_area();
        if !(area > 0.0) { return Err(RegionError::ZeroArea) }

        Ok(Self { polygon, area })
    }

    /// Inscribed regular polygon approximating `circle`.
    pub fn from_circle(circle: &Circle, segments: usize) -> Result<Self, RegionError> {
        Self::from_ring(circle.to_ring(segments))
    }

    /// Axis-aligned rectangle spanning `min` to `max`.
    pub fn rect(min: (f64, f64), max: (f64, f64)) -> Result<Self, RegionError> {
        Self::from_ring(LineString::from(vec![min, (max.0, min.1), max, (min.0, max.1)]))
    }

    #[inline] pub fn polygon(&self) -> &Polygon<f64> { &self.polygon }

    #[inline] pub fn into_polygon(self) -> Polygon<f64> { self.polygon }

    #[inline] pub fn exterior(&self) -> &LineString<f64> { self.polygon.exterior() }

    #[inline] pub fn has_holes(&self) -> bool { !self.polygon.interiors().is_empty() }

    /// Unsigned area, holes excluded.
    #[inline] pub fn area(&self) -> f64 { self.area }

    /// Area centroid.
    #[inline] pub fn centroid(&self) -> Option<Point<f64>> { self.polygon.centroid() }

    /// Axis-aligned bounding rectangle of the exterior ring.
    pub fn bounds(&self) -> Rect<f64> {
        let (min, max) = self.polygon.exterior().0.iter().fold(
            (Coord { x: f64::INFINITY, y: f64::INFINITY }, Coord { x: f64::NEG_INFINITY, y: f64::NEG_INFINITY }),
            |(min, max), c| (
                Coord { x: min.x.min(c.x), y: min.y.min(c.y) },
                Coord { x: max.x.max(c.x), y: max.y.max(c.y) },
            ),
        );
        Rect::new(min, max)
    }
}

/// Distinct vertex count of a ring, ignoring consecutive repeats and the closing vertex.
fn distinct_vertices(ring: &LineString<f64>) -> usize {
    let mut coords = ring.0.clone();
    coords.dedup();
    if coords.len() > 1 && coords.first() == coords.last() { coords.pop(); }
    coords.len()
}
