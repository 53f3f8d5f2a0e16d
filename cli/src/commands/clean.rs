use anyhow::Result;
use sidewalk_eval::{
    clean_sidewalks,
    io::{cleaned_to_geojson, read_curves, write_geojson},
    EvaluationConfig,
};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::CleanArgs) -> Result<()> {
    let sidewalks = read_curves(&args.sidewalks)?;
    let buildings = read_curves(&args.buildings)?;

    let cleaned = clean_sidewalks(&sidewalks, &buildings, EvaluationConfig::default().tolerance);

    println!(
        "[clean] writing {} sidewalks and {} building clusters to {}",
        cleaned.sidewalks.len(), cleaned.buildings.len(), args.output.display(),
    );
    write_geojson(&args.output, &cleaned_to_geojson(&cleaned))
}
