use std::f64::consts::TAU;

use geo::{Coord, LineString};

/// Controls how a curve is flattened into a polyline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolylineParams {
    /// Maximum chord deviation from the true curve.
    pub tolerance: f64,
    /// Maximum turning angle per segment, in radians.
    pub angle_tolerance: f64,
    pub min_segments: usize,
    pub max_segments: usize,
}

impl Default for PolylineParams {
    fn default() -> Self {
        Self { tolerance: 0.1, angle_tolerance: 1.0, min_segments: 6, max_segments: 100 }
    }
}

/// A full circle in the plane, e.g. a tree canopy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Coord<f64>,
    pub radius: f64,
}

impl Circle {
    #[inline] pub fn new(center: Coord<f64>, radius: f64) -> Self { Self { center, radius } }

    /// Exact area of the disc.
    #[inline] pub fn area(&self) -> f64 { std::f64::consts::PI * self.radius * self.radius }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.center.x.is_finite() && self.center.y.is_finite()
            && self.radius.is_finite() && self.radius > 0.0
    }

    /// Number of segments needed to flatten this circle under `params`.
    /// The step angle is bounded by both the chord deviation and the angle
    /// tolerance, then the count is clamped to `[min_segments, max_segments]`.
    pub fn segment_count(&self, params: &PolylineParams) -> usize {
        let mut step = params.angle_tolerance.min(TAU);
        if params.tolerance > 0.0 && params.tolerance < self.radius {
            step = step.min(2.0 * (1.0 - params.tolerance / self.radius).acos());
        }

        let min = params.min_segments.max(3);
        let max = params.max_segments.max(min);
        let count = if step > 0.0 { (TAU / step).ceil() as usize } else { max };
        count.max(min).min(max)
    }

    /// Closed ring of the inscribed regular polygon with `segments` sides.
    pub fn to_ring(&self, segments: usize) -> LineString<f64> {
        let segments = segments.max(3);
        let mut coords = (0..segments)
            .map(|i| {
                let theta = TAU * i as f64 / segments as f64;
                Coord {
                    x: self.center.x + self.radius * theta.cos(),
                    y: self.center.y + self.radius * theta.sin(),
                }
            })
            .collect::<Vec<_>>();
        coords.push(coords[0]);
        LineString(coords)
    }
}

/// A raw input curve, before sanitization.
#[derive(Clone, Debug, PartialEq)]
pub enum Curve {
    /// Vertices in order; closed when the last vertex returns to the first.
    Polyline(LineString<f64>),
    Circle(Circle),
}

impl Curve {
    /// Build a polyline curve from `(x, y)` pairs.
    pub fn polyline(coords: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Curve::Polyline(LineString(coords.into_iter().map(|(x, y)| Coord { x, y }).collect()))
    }

    #[inline] pub fn circle(center: Coord<f64>, radius: f64) -> Self { Curve::Circle(Circle::new(center, radius)) }

    /// Axis-aligned rectangle, counter-clockwise and explicitly closed.
    pub fn rect(min: (f64, f64), max: (f64, f64)) -> Self {
        Curve::polyline([min, (max.0, min.1), max, (min.0, max.1), min])
    }

    /// True when every coordinate is finite and the curve has extent.
    pub fn is_valid(&self) -> bool {
        match self {
            Curve::Polyline(line) => line.0.len() >= 2
                && line.0.iter().all(|c| c.x.is_finite() && c.y.is_finite()),
            Curve::Circle(circle) => circle.is_valid(),
        }
    }

    /// True when the curve returns to its start within `tolerance`.
    /// An explicitly repeated start vertex needs at least four coordinates;
    /// an implicit closure (gap within tolerance) needs three.
    pub fn is_closed(&self, tolerance: f64) -> bool {
        match self {
            Curve::Polyline(line) => {
                let coords = &line.0;
                let (Some(first), Some(last)) = (coords.first(), coords.last()) else { return false };
                let gap = (first.x - last.x).hypot(first.y - last.y);
                if gap > tolerance { return false }
                if gap == 0.0 { coords.len() >= 4 } else { coords.len() >= 3 }
            }
            Curve::Circle(_) => true,
        }
    }

    /// Flatten into a polyline. Circles become closed regular polygons sized
    /// by `params`; polylines are returned as given.
    pub fn to_polyline(&self, params: &PolylineParams) -> LineString<f64> {
        match self {
            Curve::Polyline(line) => line.clone(),
            Curve::Circle(circle) => circle.to_ring(circle.segment_count(params)),
        }
    }
}
