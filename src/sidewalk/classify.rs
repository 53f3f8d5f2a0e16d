use log::debug;
use planar::{relationship, Containment, Region};

use crate::geom::Features;

use super::Sidewalk;

/// Outcome of testing one outline against the building clusters.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub is_row: bool,
    /// Clusters lying fully inside the outline, in input order.
    pub buildings: Vec<Region>,
    /// Outline area minus the attributed building areas.
    pub net_area: f64,
}

/// Attribute to `outline` every building cluster that lies fully inside it.
///
/// A cluster that crosses the outline boundary is not attributed, even when it
/// crosses no other sidewalk either.
pub fn classify(outline: &Region, buildings: &Features, tolerance: f64) -> Classification {
    let mut attributed = Vec::new();

    for building in buildings.candidates(outline, tolerance) {
        match relationship(outline, building, tolerance) {
            Containment::BInsideA => attributed.push(building.clone()),
            Containment::MutualIntersection => {
                debug!("[classify] building straddles a sidewalk boundary, not attributed");
            }
            Containment::AInsideB | Containment::Disjoint => {}
        }
    }

    let net_area = if attributed.is_empty() { outline.area() } else { stencil_area(outline, &attributed) };
    Classification { is_row: !attributed.is_empty(), buildings: attributed, net_area }
}

/// Area of `outline` minus the areas of the regions inside it.
pub fn stencil_area(outline: &Region, inner: &[Region]) -> f64 {
    outline.area() - inner.iter().map(Region::area).sum::<f64>()
}

impl Sidewalk {
    /// Label this sidewalk ROW or Interior and take over its buildings.
    pub fn classify(&mut self, buildings: &Features, tolerance: f64) {
        let Classification { buildings, net_area, .. } = classify(self.outline(), buildings, tolerance);
        self.buildings = buildings;
        self.net_area = net_area;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sidewalk::SidewalkKind;

    fn rect(min: (f64, f64), max: (f64, f64)) -> Region {
        Region::rect(min, max).unwrap()
    }

    #[test]
    fn no_buildings_is_interior_with_full_area() {
        let outline = rect((0.0, 0.0), (30.0, 10.0));
        let result = classify(&outline, &Features::new(vec![]), 0.1);
        assert!(!result.is_row);
        assert!(result.buildings.is_empty());
        assert_eq!(result.net_area, 300.0);
    }

    #[test]
    fn contained_building_is_subtracted_exactly() {
        let outline = rect((0.0, 0.0), (30.0, 10.0));
        let buildings = Features::new(vec![rect((5.0, 2.0), (15.0, 7.0))]);

        let result = classify(&outline, &buildings, 0.1);
        assert!(result.is_row);
        assert_eq!(result.buildings.len(), 1);
        assert_eq!(result.net_area, 250.0);
    }

    #[test]
    fn several_buildings_all_subtract() {
        let outline = rect((0.0, 0.0), (100.0, 20.0));
        let buildings = Features::new(vec![
            rect((5.0, 5.0), (15.0, 15.0)),
            rect((30.0, 5.0), (40.0, 10.0)),
            rect((500.0, 500.0), (510.0, 510.0)),
        ]);

        let result = classify(&outline, &buildings, 0.1);
        assert_eq!(result.buildings.len(), 2);
        assert_eq!(result.net_area, 2000.0 - 100.0 - 50.0);
    }

    #[test]
    fn straddling_building_is_attributed_to_neither_sidewalk() {
        let left = rect((0.0, 0.0), (10.0, 10.0));
        let right = rect((10.0, 0.0), (20.0, 10.0));
        let buildings = Features::new(vec![rect((8.0, 4.0), (12.0, 6.0))]);

        for outline in [&left, &right] {
            let result = classify(outline, &buildings, 0.1);
            assert!(!result.is_row);
            assert_eq!(result.net_area, 100.0);
        }
    }

    #[test]
    fn thin_overhang_past_the_edge_is_not_attributed() {
        let outline = rect((0.0, 0.0), (30.0, 10.0));
        let buildings = Features::new(vec![rect((5.0, 2.0), (15.0, 10.35))]);
        let result = classify(&outline, &buildings, 0.1);
        assert!(!result.is_row);
        assert_eq!(result.net_area, 300.0);
    }

    #[test]
    fn building_enclosing_the_sidewalk_is_not_attributed() {
        let outline = rect((5.0, 5.0), (6.0, 6.0));
        let buildings = Features::new(vec![rect((0.0, 0.0), (10.0, 10.0))]);
        assert!(!classify(&outline, &buildings, 0.1).is_row);
    }

    #[test]
    fn sidewalk_classify_sets_kind() {
        let mut sidewalk = Sidewalk::new(rect((0.0, 0.0), (30.0, 10.0)));
        sidewalk.classify(&Features::new(vec![rect((5.0, 2.0), (15.0, 7.0))]), 0.1);
        assert_eq!(sidewalk.kind(), SidewalkKind::Row);
        assert_eq!(sidewalk.net_area(), 250.0);
    }
}
