use log::{info, warn};
use planar::{Curve, Region};

use crate::{
    config::EvaluationConfig,
    evaluate::{correlate, EvaluationResult},
    geom::{filter_by_region, sanitize, sanitize_all, union_features, Features},
    sidewalk::{Pedestrian, Sidewalk},
    trees::canopy_region,
};

/// Raw inputs for one evaluation. Everything but `sidewalks` may be empty.
#[derive(Clone, Debug, Default)]
pub struct EvaluationInput {
    pub sidewalks: Vec<Curve>,
    pub buildings: Vec<Curve>,
    /// Region of interest; sidewalks outside it are skipped.
    pub region: Option<Curve>,
    /// Tree canopies, usually circles.
    pub trees: Vec<Curve>,
    pub subways: Vec<Curve>,
}

/// Run classify, attach and estimate over every accepted sidewalk.
///
/// Sidewalks come back in input order, rejected curves and those outside the
/// region removed. Sidewalks with zero population are kept here.
pub fn evaluate_sidewalks(input: &EvaluationInput, config: &EvaluationConfig) -> Vec<Sidewalk> {
    let config = config.clamped();
    let tolerance = config.tolerance;

    if input.sidewalks.is_empty() {
        info!("[evaluate] no sidewalk curves supplied");
        return Vec::new();
    }

    let region = input.region.as_ref().and_then(|curve| {
        let region = sanitize(curve, tolerance);
        if region.is_none() { warn!("[evaluate] region curve is open or invalid, ignoring it"); }
        region
    });

    let outlines = filter_by_region(sanitize_all(&input.sidewalks, tolerance), region.as_ref(), tolerance);
    let buildings = Features::new(union_features(&sanitize_all(&input.buildings, tolerance)));
    let trees = Features::new(tree_regions(&input.trees, tolerance));
    let subways = Features::new(sanitize_all(&input.subways, tolerance));

    info!(
        "[evaluate] {} sidewalks, {} building clusters, {} trees, {} subway entrances",
        outlines.len(), buildings.len(), trees.len(), subways.len(),
    );

    outlines.into_iter()
        .map(|outline| Sidewalk::evaluate(outline, &buildings, &trees, &subways, &config))
        .collect()
}

/// Evaluate and correlate: only sidewalks with a non-zero population survive.
pub fn evaluate(input: &EvaluationInput, config: &EvaluationConfig) -> EvaluationResult {
    let sidewalks = evaluate_sidewalks(input, config);
    let result = correlate(&sidewalks);
    info!("[evaluate] {} of {} sidewalks populated", result.len(), sidewalks.len());
    result
}

/// Capacity-only mode: one pedestrian circle per requested occupant.
pub fn populate(input: &EvaluationInput, config: &EvaluationConfig) -> Vec<Pedestrian> {
    let radius = config.clamped().social_radius;
    let pedestrians = evaluate_sidewalks(input, config).iter()
        .filter(|sidewalk| sidewalk.population() > 0)
        .flat_map(|sidewalk| sidewalk.pedestrians(radius))
        .collect::<Vec<_>>();

    info!("[populate] placed {} pedestrians", pedestrians.len());
    pedestrians
}

/// Circles are discretized at a fixed resolution; other outlines go through
/// the sanitizer.
fn tree_regions(trees: &[Curve], tolerance: f64) -> Vec<Region> {
    trees.iter()
        .filter_map(|tree| match tree {
            Curve::Circle(circle) => canopy_region(circle),
            polyline => sanitize(polyline, tolerance),
        })
        .collect()
}
