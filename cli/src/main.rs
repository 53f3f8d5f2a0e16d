mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{clean, evaluate, populate, prepare, trees};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Evaluate(args) => evaluate::run(&cli, args),
        Commands::Populate(args) => populate::run(&cli, args),
        Commands::Prepare(args) => prepare::run(&cli, args),
        Commands::Clean(args) => clean::run(&cli, args),
        Commands::Trees(args) => trees::run(&cli, args),
    }
}

/// `-v` raises the default level; `RUST_LOG` still wins.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> anyhow::Result<()> { run() }
