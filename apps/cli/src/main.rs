// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! parabuild - generate a parametric building scene from the command line

use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use parabuild_core::{generate, BuildingParams};
use parabuild_geometry::SceneGraphKernel;
use tracing_subscriber::EnvFilter;

mod config;
mod output;

use config::CliConfig;
use output::{group_counts, write_json, write_scene_obj, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "parabuild")]
#[command(about = "Generate a parametric building scene", long_about = None)]
struct Cli {
    /// Building parameters as JSON (defaults when omitted)
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override the building width
    #[arg(long)]
    width: Option<f64>,

    /// Override the building length
    #[arg(long)]
    length: Option<f64>,

    /// Override the number of floors
    #[arg(long)]
    floors: Option<u32>,
}

fn main() -> Result<()> {
    let config = CliConfig::from_env();

    // Logs go to stderr so stdout can carry the scene
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();
    run(&cli, &config)
}

fn run(cli: &Cli, config: &CliConfig) -> Result<()> {
    let params = load_params(cli)?;
    let generation = generate(&params, &SceneGraphKernel).context("Failed to generate scene")?;

    for (group, solids) in group_counts(&generation.scene) {
        tracing::info!(group, solids, "Scene group");
    }
    // Invalid balconies are already reported through `tracing::warn!`
    if !generation.warnings.is_empty() {
        tracing::info!(count = generation.warnings.len(), "Some balconies were skipped");
    }

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            write_output(&mut out, cli.format, &generation, config)?;
            out.flush()?;
            tracing::info!(path = %path.display(), "Wrote scene");
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            write_output(&mut out, cli.format, &generation, config)?;
            out.flush()?;
        }
    }

    Ok(())
}

fn write_output<W: Write>(
    out: &mut W,
    format: OutputFormat,
    generation: &parabuild_core::Generation<parabuild_geometry::Geometry>,
    config: &CliConfig,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, generation),
        OutputFormat::Obj => write_scene_obj(out, &generation.scene, &config.tessellation),
    }
}

/// Read the parameter file, apply command-line overrides and validate.
fn load_params(cli: &Cli) -> Result<BuildingParams> {
    let mut params = match &cli.params {
        Some(path) => read_params(path)?,
        None => BuildingParams::default(),
    };

    if let Some(width) = cli.width {
        params.width = width;
    }
    if let Some(length) = cli.length {
        params.length = length;
    }
    if let Some(floors) = cli.floors {
        params.number_floors = floors;
    }

    params.validate().context("Invalid building parameters")?;
    Ok(params)
}

fn read_params(path: &Path) -> Result<BuildingParams> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse {}", path.display()))
}
