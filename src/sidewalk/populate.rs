use geo::{Coord, Point};
use planar::Region;

use super::Sidewalk;

/// One placed occupant: a circle of the social-distance radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pedestrian {
    pub center: Point<f64>,
    pub radius: f64,
}

/// Place `count` pedestrians at equal arc-length steps along the outline,
/// starting at its first vertex.
pub fn place_pedestrians(outline: &Region, count: u32, radius: f64) -> Vec<Pedestrian> {
    let ring = &outline.exterior().0;
    let lengths = ring.windows(2).map(|w| segment_length(w[0], w[1])).collect::<Vec<_>>();
    let total: f64 = lengths.iter().sum();

    if count == 0 || total <= 0.0 { return Vec::new() }

    let mut pedestrians = Vec::with_capacity(count as usize);
    let (mut segment, mut walked) = (0, 0.0);

    for k in 0..count {
        let target = total * k as f64 / count as f64;
        while segment + 1 < lengths.len() && walked + lengths[segment] < target {
            walked += lengths[segment];
            segment += 1;
        }

        let t = if lengths[segment] > 0.0 { ((target - walked) / lengths[segment]).clamp(0.0, 1.0) } else { 0.0 };
        let (a, b) = (ring[segment], ring[segment + 1]);
        let center = Coord { x: a.x + (b.x - a.x) * t, y: a.y + (b.y - a.y) * t };
        pedestrians.push(Pedestrian { center: center.into(), radius });
    }

    pedestrians
}

#[inline]
fn segment_length(a: Coord<f64>, b: Coord<f64>) -> f64 { (b.x - a.x).hypot(b.y - a.y) }

impl Sidewalk {
    /// Spread this sidewalk's population along its outline.
    pub fn pedestrians(&self, radius: f64) -> Vec<Pedestrian> {
        place_pedestrians(self.outline(), self.population(), radius)
    }
}
