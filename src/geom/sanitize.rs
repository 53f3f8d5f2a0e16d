use geo::{Coord, LineString};
use log::debug;
use planar::{Curve, PolylineParams, Region};

/// Turning angle (radians) below which two consecutive segments are merged.
const MERGE_ANGLE_TOLERANCE: f64 = 0.1;

/// Validate and rebuild a raw curve into a simplified closed polyline region.
///
/// Open, invalid or degenerate curves yield `None`; they are dropped, not reported.
pub fn sanitize(curve: &Curve, tolerance: f64) -> Option<Region> {
    if !curve.is_valid() || !curve.is_closed(tolerance) { return None }

    let params = PolylineParams { tolerance, ..PolylineParams::default() };
    let mut coords = curve.to_polyline(&params).0;

    // The ring is rebuilt implicitly closed; a closing vertex within tolerance
    // of the start is folded into it.
    if let (Some(&first), Some(&last)) = (coords.first(), coords.last()) {
        if distance(first, last) <= tolerance { coords.pop(); }
    }

    Region::from_ring(LineString(merge_colinear(&coords, MERGE_ANGLE_TOLERANCE))).ok()
}

/// Sanitize every curve, keeping only the accepted ones in input order.
pub fn sanitize_all(curves: &[Curve], tolerance: f64) -> Vec<Region> {
    let regions = curves.iter().enumerate()
        .filter_map(|(i, curve)| {
            let region = sanitize(curve, tolerance);
            if region.is_none() { debug!("[sanitize] dropped curve {i}: open, invalid or degenerate"); }
            region
        })
        .collect::<Vec<_>>();

    debug!("[sanitize] kept {} of {} curves", regions.len(), curves.len());
    regions
}

/// Merge consecutive colinear segments of an implicitly closed ring, the seam included.
/// Zero-length segments are dropped along the way.
pub(crate) fn merge_colinear(coords: &[Coord<f64>], angle_tolerance: f64) -> Vec<Coord<f64>> {
    let mut out: Vec<Coord<f64>> = Vec::with_capacity(coords.len());

    for &c in coords {
        if out.last().is_some_and(|&last| last == c) { continue }
        while out.len() >= 2 && colinear(out[out.len() - 2], out[out.len() - 1], c, angle_tolerance) {
            out.pop();
        }
        out.push(c);
    }

    // Wrap around the seam until both ends are stable.
    while out.len() >= 3 {
        let n = out.len();
        if out[n - 1] == out[0] || colinear(out[n - 2], out[n - 1], out[0], angle_tolerance) {
            out.pop();
        } else if colinear(out[n - 1], out[0], out[1], angle_tolerance) {
            out.remove(0);
        } else {
            break;
        }
    }

    out
}

/// True when the turn at `b` on the path `a -> b -> c` is within `angle_tolerance`.
fn colinear(a: Coord<f64>, b: Coord<f64>, c: Coord<f64>, angle_tolerance: f64) -> bool {
    let (d1, d2) = (b - a, c - b);
    let cross = d1.x * d2.y - d1.y * d2.x;
    let dot = d1.x * d2.x + d1.y * d2.y;
    cross.atan2(dot).abs() <= angle_tolerance
}

#[inline]
fn distance(a: Coord<f64>, b: Coord<f64>) -> f64 { (a.x - b.x).hypot(a.y - b.y) }
