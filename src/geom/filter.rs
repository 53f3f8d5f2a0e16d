use log::debug;
use planar::{relationship, Containment, Region};

/// Restrict `candidates` to those inside or crossing `region`.
///
/// With no region every candidate is kept unchanged. Candidates fully outside,
/// or only touching the region boundary, are dropped.
pub fn filter_by_region(candidates: Vec<Region>, region: Option<&Region>, tolerance: f64) -> Vec<Region> {
    let Some(region) = region else { return candidates };

    let total = candidates.len();
    let kept = candidates.into_iter()
        .filter(|candidate| matches!(
            relationship(region, candidate, tolerance),
            Containment::BInsideA | Containment::MutualIntersection
        ))
        .collect::<Vec<_>>();

    debug!("[filter] {} of {} candidates fall within the region", kept.len(), total);
    kept
}
