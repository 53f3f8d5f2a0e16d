use std::sync::OnceLock;

use geo::Point;
use planar::Region;

use crate::{config::EvaluationConfig, geom::Features};

/// Whether a sidewalk encloses building footprints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SidewalkKind {
    /// Right-of-way: at least one building cluster lies inside the outline.
    Row,
    /// No building inside; a free-standing path or plaza.
    Interior,
}

/// One sidewalk region and everything derived from it during an evaluation.
///
/// A sidewalk goes through a single pass: `classify`, `attach`, `estimate`,
/// in that order. `Sidewalk::evaluate` runs the whole pass. Flags are derived
/// from what was actually matched, so `is_row` holds iff `buildings` is
/// non-empty, and likewise for trees and the subway entrance.
#[derive(Debug, Clone)]
pub struct Sidewalk {
    outline: Region,
    centroid: OnceLock<Option<Point<f64>>>,
    pub(super) buildings: Vec<Region>,
    pub(super) net_area: f64,
    pub(super) trees: Vec<Region>,
    pub(super) subway: Option<Region>,
    pub(super) capacity: u32,
    pub(super) population: u32,
}

impl Sidewalk {
    /// Fresh sidewalk with nothing attributed and the full outline area usable.
    pub fn new(outline: Region) -> Self {
        Self {
            net_area: outline.area(),
            outline,
            centroid: OnceLock::new(),
            buildings: Vec::new(),
            trees: Vec::new(),
            subway: None,
            capacity: 0,
            population: 0,
        }
    }

    /// Run the full pass over one outline.
    pub fn evaluate(
        outline: Region,
        buildings: &Features,
        trees: &Features,
        subways: &Features,
        config: &EvaluationConfig,
    ) -> Self {
        let mut sidewalk = Self::new(outline);
        sidewalk.classify(buildings, config.tolerance);
        sidewalk.attach(trees, subways, config.tolerance);
        sidewalk.estimate(config);
        sidewalk
    }

    #[inline] pub fn outline(&self) -> &Region { &self.outline }

    /// Area centroid of the outline, computed on first access.
    #[inline] pub fn centroid(&self) -> Option<Point<f64>> { *self.centroid.get_or_init(|| self.outline.centroid()) }

    #[inline] pub fn is_row(&self) -> bool { !self.buildings.is_empty() }

    #[inline]
    pub fn kind(&self) -> SidewalkKind {
        if self.is_row() { SidewalkKind::Row } else { SidewalkKind::Interior }
    }

    #[inline] pub fn buildings(&self) -> &[Region] { &self.buildings }

    /// Outline area minus attributed buildings and trees. May go negative when
    /// large or overlapping trees are subtracted; capacity is zero then.
    #[inline] pub fn net_area(&self) -> f64 { self.net_area }

    #[inline] pub fn has_trees(&self) -> bool { !self.trees.is_empty() }

    #[inline] pub fn trees(&self) -> &[Region] { &self.trees }

    #[inline] pub fn has_subway(&self) -> bool { self.subway.is_some() }

    /// The last matching subway entrance in input order.
    #[inline] pub fn subway(&self) -> Option<&Region> { self.subway.as_ref() }

    #[inline] pub fn capacity(&self) -> u32 { self.capacity }

    #[inline] pub fn population(&self) -> u32 { self.population }
}
