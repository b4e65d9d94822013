mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use steps_core::ChartConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("steps_cli=warn,steps_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => ChartConfig::load(path)?,
        None => ChartConfig::default(),
    };

    match args.command {
        Command::Info { file, layout, json } => commands::info::run(&file, layout, json),
        Command::Autogen { file, from, to } => commands::autogen::run(&file, from, to, config),
        Command::Fix { file, layout } => commands::fix::run(&file, layout),
        Command::Normalize {
            difficulty,
            meter,
            description,
        } => commands::normalize::run(difficulty, meter, &description),
    }
}
