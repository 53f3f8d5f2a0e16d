use std::path::PathBuf;

use sidewalk_eval::trees::Borough;

/// Sidewalk capacity CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "sidewalk-eval", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Estimate capacity and population for each sidewalk
    Evaluate(EvaluateArgs),

    /// Place one pedestrian circle per requested occupant
    Populate(EvaluateArgs),

    /// Split sidewalks into ROW and Interior
    Prepare(PrepareArgs),

    /// Cut contained building clusters out of sidewalks
    Clean(CleanArgs),

    /// Build tree canopies from a street-tree CSV
    Trees(TreesArgs),
}

#[derive(clap::Args, Debug)]
pub struct EvaluateArgs {
    /// Sidewalk outlines (GeoJSON)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub sidewalks: PathBuf,

    /// Building footprints (GeoJSON)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub buildings: Option<PathBuf>,

    /// Region of interest, first curve is used (GeoJSON)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub region: Option<PathBuf>,

    /// Tree canopies (GeoJSON, points with a radius)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub trees: Option<PathBuf>,

    /// Subway entrances (GeoJSON)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub subways: Option<PathBuf>,

    /// Evaluation options (JSON); flags below override it
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Social-distance radius per pedestrian
    #[arg(long)]
    pub radius: Option<f64>,

    /// Capacity utilization in percent
    #[arg(long)]
    pub utilization: Option<f64>,

    /// Population multiplier near subway entrances
    #[arg(long)]
    pub subway_influence: Option<f64>,

    /// Output GeoJSON file
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct PrepareArgs {
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub sidewalks: PathBuf,

    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub buildings: PathBuf,

    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub region: Option<PathBuf>,

    /// Output GeoJSON file
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct CleanArgs {
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub sidewalks: PathBuf,

    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub buildings: PathBuf,

    /// Output GeoJSON file
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct TreesArgs {
    /// Street-tree census CSV
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub csv: PathBuf,

    /// Column index of the x coordinate
    #[arg(long)]
    pub x: usize,

    /// Column index of the y coordinate
    #[arg(long)]
    pub y: usize,

    /// Column index of the trunk diameter
    #[arg(long)]
    pub diameter: usize,

    /// Column index of the grouping key
    #[arg(long, default_value_t = 0)]
    pub key_column: usize,

    /// Borough to load, defaults to Manhattan
    #[arg(long, conflicts_with = "key")]
    pub borough: Option<Borough>,

    /// Raw grouping key, for tables not keyed by borough
    #[arg(long)]
    pub key: Option<String>,

    /// Keep only trees inside or crossing this region (GeoJSON)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub region: Option<PathBuf>,

    /// Output GeoJSON file
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,
}
