use anyhow::Result;
use log::info;
use sidewalk_eval::io::{result_to_geojson, write_geojson};

use super::{load_config, load_input};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::EvaluateArgs) -> Result<()> {
    println!("[evaluate] loading sidewalks from {}", args.sidewalks.display());
    let input = load_input(args)?;
    let config = load_config(args)?;
    info!("[evaluate] config={:?}", config.clamped());

    let result = sidewalk_eval::evaluate(&input, &config);
    let total = result.populations().iter().map(|&p| u64::from(p)).sum::<u64>();

    println!("[evaluate] writing {} sidewalks ({} pedestrians) to {}", result.len(), total, args.output.display());
    write_geojson(&args.output, &result_to_geojson(&result))
}
