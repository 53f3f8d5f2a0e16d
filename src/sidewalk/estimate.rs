use crate::config::EvaluationConfig;

use super::Sidewalk;

/// Value of pi used for pedestrian footprints. Capacities are calibrated against it.
pub const PI_APPROX: f64 = 3.14;

/// Ground area claimed by one pedestrian at the given social-distance radius.
/// A non-positive radius counts as 1.
#[inline]
pub fn pedestrian_area(social_radius: f64) -> f64 {
    let radius = if social_radius > 0.0 { social_radius } else { 1.0 };
    PI_APPROX * radius * radius
}

/// Number of whole pedestrian footprints that fit in `net_area`.
pub fn estimate_capacity(net_area: f64, social_radius: f64) -> u32 {
    if !(net_area > 0.0) { return 0 }
    (net_area / pedestrian_area(social_radius)).floor() as u32
}

/// Requested occupants for a sidewalk of the given capacity.
///
/// `utilization_percent` is clamped to `[0, 100]`. When `has_subway` is set the
/// result is scaled by `subway_influence` clamped to `[1, 2]`, flooring after
/// each step.
pub fn estimate_population(capacity: u32, utilization_percent: f64, subway_influence: f64, has_subway: bool) -> u32 {
    let utilization = utilization_percent.clamp(0.0, 100.0);
    let mut population = (utilization * capacity as f64 / 100.0).floor();

    if has_subway {
        population = (population * subway_influence.clamp(1.0, 2.0)).floor();
    }

    population as u32
}

impl Sidewalk {
    /// Derive capacity and population from the current net area.
    pub fn estimate(&mut self, config: &EvaluationConfig) {
        self.capacity = estimate_capacity(self.net_area, config.social_radius);
        self.population = estimate_population(
            self.capacity,
            config.utilization_percent,
            config.subway_influence,
            self.has_subway(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footprint_uses_fixed_pi() {
        assert!((pedestrian_area(3.0) - 28.26).abs() < 1e-9);
        assert_eq!(pedestrian_area(0.0), PI_APPROX);
        assert_eq!(pedestrian_area(-4.0), PI_APPROX);
    }

    #[test]
    fn capacity_floors() {
        assert_eq!(estimate_capacity(300.0, 3.0), 10);
        assert_eq!(estimate_capacity(250.0, 3.0), 8);
        assert_eq!(estimate_capacity(28.0, 3.0), 0);
    }

    #[test]
    fn capacity_is_zero_without_usable_area() {
        assert_eq!(estimate_capacity(0.0, 3.0), 0);
        assert_eq!(estimate_capacity(-120.0, 3.0), 0);
        assert_eq!(estimate_capacity(f64::NAN, 3.0), 0);
    }

    #[test]
    fn capacity_is_monotonic() {
        let areas = [0.0, 10.0, 50.0, 299.0, 300.0, 1000.0];
        for pair in areas.windows(2) {
            assert!(estimate_capacity(pair[0], 3.0) <= estimate_capacity(pair[1], 3.0));
        }

        let radii = [0.5, 1.0, 2.0, 3.0, 5.0];
        for pair in radii.windows(2) {
            assert!(estimate_capacity(500.0, pair[0]) >= estimate_capacity(500.0, pair[1]));
        }
    }

    #[test]
    fn utilization_is_clamped() {
        assert_eq!(estimate_population(10, 150.0, 1.0, false), 10);
        assert_eq!(estimate_population(10, -20.0, 1.0, false), 0);
        assert_eq!(estimate_population(10, 50.0, 1.0, false), 5);
    }

    #[test]
    fn subway_influence_is_clamped() {
        assert_eq!(estimate_population(10, 100.0, 5.0, true), 20);
        assert_eq!(estimate_population(10, 100.0, 0.5, true), 10);
    }

    #[test]
    fn subway_influence_ignored_without_subway() {
        assert_eq!(estimate_population(10, 100.0, 2.0, false), 10);
    }

    #[test]
    fn population_floors_after_each_step() {
        // floor(0.5 * 11) = 5, then floor(5 * 1.25) = 6
        assert_eq!(estimate_population(11, 50.0, 1.25, true), 6);
    }

    #[test]
    fn population_is_monotonic_in_utilization() {
        let mut last = 0;
        for util in (0..=100).step_by(5) {
            let population = estimate_population(37, util as f64, 1.25, true);
            assert!(population >= last);
            last = population;
        }
    }
}
