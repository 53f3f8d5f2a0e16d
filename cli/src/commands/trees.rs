use anyhow::Result;
use log::warn;
use sidewalk_eval::{
    io::{circles_to_geojson, write_geojson},
    sanitize,
    trees::{load_trees, TreeColumns},
    EvaluationConfig,
};

use super::read_region;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::TreesArgs) -> Result<()> {
    let tolerance = EvaluationConfig::default().tolerance;
    let key = match (&args.key, args.borough) {
        (Some(key), _) => key.clone(),
        (None, borough) => borough.unwrap_or_default().name().to_string(),
    };
    let columns = TreeColumns { x: args.x, y: args.y, diameter: args.diameter, key: args.key_column };
    let region = read_region(args.region.as_deref())?.and_then(|curve| {
        let region = sanitize(&curve, tolerance);
        if region.is_none() { warn!("[trees] region curve is open or invalid, ignoring it"); }
        region
    });

    println!("[trees] loading {} trees from {}", key, args.csv.display());
    let trees = load_trees(&args.csv, &columns, &key, region.as_ref(), tolerance)?;

    println!("[trees] writing {} trees to {}", trees.len(), args.output.display());
    write_geojson(&args.output, &circles_to_geojson(&trees))
}
