// main.rs
//
// Command line front end: validate arguments, build the Reuleaux tetrahedron
// and write it to disk.

use anyhow::{Context, Result};
use clap::Parser;
use reuleaux::config::{self, MeshConfig};
use reuleaux::float_types::Real;
use reuleaux::io::ExportFormat;
use reuleaux::mesh::Mesh;
use std::path::PathBuf;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

/// Reuleaux tetrahedron mesher
#[derive(Parser)]
#[command(name = "reuleaux")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Write a triangulated Reuleaux tetrahedron", long_about = None)]
struct Cli {
    /// Sample intervals along each face edge (positive integer, ideally a power of two)
    #[arg(short, long, default_value_t = config::DEFAULT_STEP, value_parser = parse_step)]
    step: usize,

    /// Width of the solid; defaults to the unit-sphere construction (√(8/3))
    #[arg(short, long, value_parser = config::parse_width)]
    width: Option<Real>,

    /// Output file [default: stl/reuleaux_tetrahedron.<format extension>]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Stl)]
    format: ExportFormat,

    /// Merge duplicated boundary vertices before writing
    #[arg(long)]
    weld: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn parse_step(input: &str) -> Result<usize, String> {
    config::parse_step(input).map_err(|e| e.to_string())
}

impl From<&Cli> for MeshConfig {
    fn from(cli: &Cli) -> Self {
        MeshConfig::resolve(cli.step, cli.width, cli.output.clone(), cli.format, cli.weld)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = MeshConfig::from(&cli);
    if !config.step_is_conventional() {
        warn!(step = config.step, "step is not a power of two");
    }

    let mut solid = Mesh::<()>::reuleaux_tetrahedron(config.step, None)
        .with_context(|| format!("building Reuleaux tetrahedron with step {}", config.step))?;

    let factor = config.scale_factor();
    if factor != 1.0 {
        solid = solid.scale(factor);
    }
    if config.weld {
        solid = solid.welded();
    }

    info!(
        vertices = solid.vertex_count(),
        triangles = solid.triangle_count(),
        volume = solid.volume(),
        "mesh ready"
    );

    solid
        .write_to(&config.output, config.format)
        .with_context(|| format!("writing {}", config.output.display()))?;

    println!(
        "Wrote {} triangles to {}",
        solid.triangle_count(),
        config.output.display()
    );
    Ok(())
}
