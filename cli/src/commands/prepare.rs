use anyhow::Result;
use sidewalk_eval::{
    io::{prepared_to_geojson, read_curves, write_geojson},
    prepare_sidewalks, EvaluationConfig,
};

use super::read_region;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::PrepareArgs) -> Result<()> {
    let sidewalks = read_curves(&args.sidewalks)?;
    let buildings = read_curves(&args.buildings)?;
    let region = read_region(args.region.as_deref())?;

    let prepared = prepare_sidewalks(&sidewalks, &buildings, region.as_ref(), EvaluationConfig::default().tolerance);

    println!(
        "[prepare] writing {} ROW and {} interior sidewalks to {}",
        prepared.row.len(), prepared.interior.len(), args.output.display(),
    );
    write_geojson(&args.output, &prepared_to_geojson(&prepared))
}
