use geo::Rect;
use planar::Region;
use rstar::{primitives::{GeomWithData, Rectangle}, RTree, AABB};

/// Bounding rectangle of one region, tagged with the region's input index.
type IndexedBounds = GeomWithData<Rectangle<[f64; 2]>, usize>;

/// An indexed collection of feature regions (buildings, trees, subway entrances).
///
/// Candidate lookups go through the R-tree, but results always come back in
/// input order so that order-dependent tie-breaks stay deterministic.
#[derive(Debug, Clone)]
pub struct Features {
    regions: Vec<Region>,
    rtree: RTree<IndexedBounds>,
}

impl Features {
    /// Construct a Features index from a vector of regions.
    pub fn new(regions: Vec<Region>) -> Self {
        Self {
            rtree: RTree::bulk_load(
                regions.iter().enumerate()
                    .map(|(i, region)| IndexedBounds::new(rectangle(region.bounds()), i))
                    .collect()
            ),
            regions,
        }
    }

    /// Get the number of regions.
    #[inline] pub fn len(&self) -> usize { self.regions.len() }

    /// Check if there are no regions.
    #[inline] pub fn is_empty(&self) -> bool { self.regions.is_empty() }

    /// Get a reference to the list of regions.
    #[inline] pub fn regions(&self) -> &[Region] { &self.regions }

    /// Regions whose bounding box comes within `tolerance` of `region`'s, in input order.
    pub fn candidates(&self, region: &Region, tolerance: f64) -> Vec<&Region> {
        let rect = region.bounds();
        let envelope = AABB::from_corners(
            [rect.min().x - tolerance, rect.min().y - tolerance],
            [rect.max().x + tolerance, rect.max().y + tolerance],
        );

        let mut indices = self.rtree.locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.data)
            .collect::<Vec<_>>();
        indices.sort_unstable();

        indices.into_iter().map(|i| &self.regions[i]).collect()
    }
}

#[inline]
fn rectangle(rect: Rect<f64>) -> Rectangle<[f64; 2]> {
    Rectangle::from_corners(rect.min().into(), rect.max().into())
}

impl From<Vec<Region>> for Features {
    fn from(regions: Vec<Region>) -> Self { Self::new(regions) }
}
