//! raster-kit: run a drawing command script and save the canvases it names.
//!
//! Run: `raster-kit input.txt out/`

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use raster_kit::command::Interpreter;
use raster_kit::config::Config;
use raster_kit::logging;
use std::path::PathBuf;

/// Rasterize a drawing command script into images
#[derive(Parser, Debug)]
#[command(name = "raster-kit")]
#[command(version)]
#[command(about = "Rasterize a drawing command script into images", long_about = None)]
struct Cli {
    /// Command script to run
    input: PathBuf,

    /// Directory saveCanvas writes into (created if missing)
    output_dir: PathBuf,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial canvas width, overriding config and environment
    #[arg(long)]
    width: Option<u32>,

    /// Initial canvas height, overriding config and environment
    #[arg(long)]
    height: Option<u32>,

    /// Enable debug output (also RASTER_KIT_DEBUG=1)
    #[arg(long)]
    debug: bool,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default_path().map(Config::load_or_default).unwrap_or_default(),
    };

    let mut config = config.apply_env();
    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug || logging::debug_requested() {
        logging::install(LevelFilter::Debug);
    }

    let config = load_config(&cli)?;
    log::debug!(target: "main", "config: {config:?}");

    std::fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("creating output directory {}", cli.output_dir.display()))?;

    let mut interpreter = Interpreter::with_config(&config, &cli.output_dir)?;
    let executed = interpreter
        .run_file(&cli.input)
        .with_context(|| format!("running {}", cli.input.display()))?;

    log::debug!(target: "main", "executed {executed} commands");
    Ok(())
}
