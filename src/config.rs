use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SOCIAL_RADIUS: f64 = 3.0;
pub const DEFAULT_UTILIZATION_PERCENT: f64 = 10.0;
pub const DEFAULT_SUBWAY_INFLUENCE: f64 = 1.25;

/// Options for one evaluation pass.
///
/// Out-of-range values are never rejected; `clamped` pulls each one back to
/// the nearest valid bound, and the estimators clamp again on their own.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Per-pedestrian exclusion radius.
    pub social_radius: f64,
    /// Share of capacity requested as population, in percent `[0, 100]`.
    pub utilization_percent: f64,
    /// Population multiplier for sidewalks touching a subway entrance, `[1, 2]`.
    pub subway_influence: f64,
    /// Spatial tolerance for sanitization and containment tests.
    pub tolerance: f64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            social_radius: DEFAULT_SOCIAL_RADIUS,
            utilization_percent: DEFAULT_UTILIZATION_PERCENT,
            subway_influence: DEFAULT_SUBWAY_INFLUENCE,
            tolerance: planar::DEFAULT_TOLERANCE,
        }
    }
}

impl EvaluationConfig {
    /// Read a config from a JSON file. Missing keys fall back to defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("[config] Failed to open config file: {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("[config] Failed to parse config from {}", path.display()))
    }

    /// Copy with every option forced into its valid range.
    pub fn clamped(&self) -> Self {
        Self {
            social_radius: if self.social_radius > 0.0 { self.social_radius } else { 1.0 },
            utilization_percent: self.utilization_percent.clamp(0.0, 100.0),
            subway_influence: self.subway_influence.clamp(1.0, 2.0),
            tolerance: if self.tolerance > 0.0 { self.tolerance } else { planar::DEFAULT_TOLERANCE },
        }
    }
}
