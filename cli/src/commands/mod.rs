pub mod clean;
pub mod evaluate;
pub mod populate;
pub mod prepare;
pub mod trees;

use std::path::Path;

use anyhow::Result;
use log::warn;
use sidewalk_eval::{io::read_curves, Curve, EvaluationConfig, EvaluationInput};

use crate::cli::EvaluateArgs;

/// Curves from an optional GeoJSON file; absent means none.
fn read_optional(path: Option<&Path>) -> Result<Vec<Curve>> {
    path.map(read_curves).transpose().map(Option::unwrap_or_default)
}

/// First curve of the region file, if one was given.
fn read_region(path: Option<&Path>) -> Result<Option<Curve>> {
    let curves = read_optional(path)?;
    if curves.len() > 1 { warn!("[cli] region file holds {} curves, using the first", curves.len()); }
    Ok(curves.into_iter().next())
}

fn load_input(args: &EvaluateArgs) -> Result<EvaluationInput> {
    Ok(EvaluationInput {
        sidewalks: read_curves(&args.sidewalks)?,
        buildings: read_optional(args.buildings.as_deref())?,
        region: read_region(args.region.as_deref())?,
        trees: read_optional(args.trees.as_deref())?,
        subways: read_optional(args.subways.as_deref())?,
    })
}

/// Config file first, then flag overrides.
fn load_config(args: &EvaluateArgs) -> Result<EvaluationConfig> {
    let mut config = match &args.config {
        Some(path) => EvaluationConfig::from_json_file(path)?,
        None => EvaluationConfig::default(),
    };
    if let Some(radius) = args.radius { config.social_radius = radius; }
    if let Some(utilization) = args.utilization { config.utilization_percent = utilization; }
    if let Some(influence) = args.subway_influence { config.subway_influence = influence; }
    Ok(config)
}
