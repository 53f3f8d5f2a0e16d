use log::debug;
use planar::{fill_rings, union, Region};

/// Union raw footprints into non-overlapping clusters without courtyards.
///
/// The first pass merges touching and overlapping footprints. Its output is
/// read back as closed outlines, so a courtyard comes out as a separate
/// outline inside its cluster; the second pass absorbs it. Both passes always
/// run.
pub fn union_features(regions: &[Region]) -> Vec<Region> {
    if regions.is_empty() { return Vec::new() }

    let first = union(regions).iter().flat_map(fill_rings).collect::<Vec<_>>();
    let second = union(&first);

    debug!("[aggregate] {} footprints -> {} outlines -> {} clusters", regions.len(), first.len(), second.len());
    second
}
