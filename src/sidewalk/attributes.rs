use planar::inside_or_intersecting;

use crate::geom::Features;

use super::Sidewalk;

impl Sidewalk {
    /// Attach trees and the subway entrance in one step.
    pub fn attach(&mut self, trees: &Features, subways: &Features, tolerance: f64) {
        self.attach_trees(trees, tolerance);
        self.attach_subway(subways, tolerance);
    }

    /// Attribute every tree canopy inside or crossing the outline.
    ///
    /// Each match subtracts its full canopy area from the net area right away.
    /// Subtraction is cumulative and not floored at zero.
    pub fn attach_trees(&mut self, trees: &Features, tolerance: f64) {
        for tree in trees.candidates(self.outline(), tolerance) {
            if inside_or_intersecting(self.outline(), tree, tolerance) {
                self.net_area -= tree.area();
                self.trees.push(tree.clone());
            }
        }
    }

    /// Record the subway entrance inside or crossing the outline.
    /// When several qualify, the last one in input order is kept.
    pub fn attach_subway(&mut self, subways: &Features, tolerance: f64) {
        for entrance in subways.candidates(self.outline(), tolerance) {
            if inside_or_intersecting(self.outline(), entrance, tolerance) {
                self.subway = Some(entrance.clone());
            }
        }
    }
}
