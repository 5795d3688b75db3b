use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use mesh_viewspots::config::{MeshOptions, MissingValuePolicy};
use mesh_viewspots::io::json::{read_mesh_file, view_spots_to_json};

// ---------------------------------------------------------------------------
// CLI arguments
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(
    name = "viewspots",
    about = "Print the best N view spots of a JSON mesh",
    allow_negative_numbers = true
)]
struct Cli {
    /// JSON mesh file
    mesh_file: PathBuf,

    /// Number of view spots to report (all when omitted, none when <= 0)
    n: Option<i64>,

    /// Check node and element references (also enabled by SANITY_CHECK=true)
    #[arg(long)]
    sanity_check: bool,

    /// Treat elements without a value as negative infinity instead of failing
    #[arg(long)]
    allow_missing_values: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn mesh_options(&self) -> MeshOptions {
        let mut opts = MeshOptions::from_env();
        if self.sanity_check {
            opts = opts.with_sanity_check(true);
        }
        if self.allow_missing_values {
            opts = opts.with_missing_values(MissingValuePolicy::NegativeInfinity);
        }
        opts
    }
}

fn run(cli: &Cli) -> Result<String> {
    let options = cli.mesh_options();
    log::debug!("mesh options: {options:?}");
    let mesh = read_mesh_file(&cli.mesh_file, options)
        .with_context(|| format!("failed to load {}", cli.mesh_file.display()))?;
    let spots = mesh.compute_top_view_spots(cli.n);
    log::info!("{} view spots selected", spots.len());
    Ok(view_spots_to_json(&spots, cli.pretty)?)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("There was an error: {e:#}.");
            ExitCode::FAILURE
        }
    }
}
