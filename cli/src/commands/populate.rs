use anyhow::Result;
use sidewalk_eval::io::{pedestrians_to_geojson, write_geojson};

use super::{load_config, load_input};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::EvaluateArgs) -> Result<()> {
    println!("[populate] loading sidewalks from {}", args.sidewalks.display());
    let input = load_input(args)?;
    let config = load_config(args)?;

    let pedestrians = sidewalk_eval::populate(&input, &config);

    println!("[populate] writing {} pedestrians to {}", pedestrians.len(), args.output.display());
    write_geojson(&args.output, &pedestrians_to_geojson(&pedestrians))
}
