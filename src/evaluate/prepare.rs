use log::{debug, info, warn};
use planar::{contains_point, difference, is_inside, Curve, PointContainment, Region};

use crate::geom::{filter_by_region, sanitize, sanitize_all, union_features, Features};

/// Sidewalks split by whether any building cluster lies inside them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreparedSidewalks {
    pub row: Vec<Region>,
    pub interior: Vec<Region>,
}

/// Sanitize, region-filter and split sidewalks into ROW and Interior.
pub fn prepare_sidewalks(
    sidewalks: &[Curve],
    buildings: &[Curve],
    region: Option<&Curve>,
    tolerance: f64,
) -> PreparedSidewalks {
    let region = region.and_then(|curve| {
        let region = sanitize(curve, tolerance);
        if region.is_none() { warn!("[prepare] region curve is open or invalid, ignoring it"); }
        region
    });

    let outlines = filter_by_region(sanitize_all(sidewalks, tolerance), region.as_ref(), tolerance);
    let clusters = Features::new(union_features(&sanitize_all(buildings, tolerance)));

    let (row, interior): (Vec<_>, Vec<_>) = outlines.into_iter().partition(|outline| {
        clusters.candidates(outline, tolerance).into_iter()
            .any(|cluster| is_inside(outline, cluster, tolerance))
    });

    info!("[prepare] {} ROW, {} interior sidewalks", row.len(), interior.len());
    PreparedSidewalks { row, interior }
}

/// Sidewalks with their contained building clusters cut out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CleanedSidewalks {
    /// One group per accepted sidewalk, in input order.
    pub sidewalks: Vec<Vec<Region>>,
    /// The unioned building clusters.
    pub buildings: Vec<Region>,
}

/// Cut every sidewalk by the building clusters whose centroid lies inside it.
///
/// The set of cutting clusters is rebuilt for each sidewalk. A sidewalk with
/// no cluster inside is passed through as a one-element group.
pub fn clean_sidewalks(sidewalks: &[Curve], buildings: &[Curve], tolerance: f64) -> CleanedSidewalks {
    let outlines = sanitize_all(sidewalks, tolerance);
    let clusters = union_features(&sanitize_all(buildings, tolerance));
    let centers = clusters.iter().map(Region::centroid).collect::<Vec<_>>();

    let groups = outlines.into_iter()
        .map(|outline| {
            let cutters = clusters.iter().zip(&centers)
                .filter(|(_, center)| center.is_some_and(|c| contains_point(&outline, c, tolerance) == PointContainment::Inside))
                .map(|(cluster, _)| cluster.clone())
                .collect::<Vec<_>>();

            if cutters.is_empty() { return vec![outline] }

            debug!("[clean] cutting {} clusters from a sidewalk", cutters.len());
            difference(&outline, &cutters)
        })
        .collect::<Vec<_>>();

    info!("[clean] {} sidewalks cleaned against {} building clusters", groups.len(), clusters.len());
    CleanedSidewalks { sidewalks: groups, buildings: clusters }
}
