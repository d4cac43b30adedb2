//! glsm - drive the glsm math kernel from the command line
//!
//! Generates noise images and grid meshes, replays orbit camera input and
//! unprojects pixels, all through the same code a renderer would call.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;

use config::SceneConfig;

#[derive(Parser)]
#[command(name = "glsm")]
#[command(author, version, about = "GLSL-style math kernel toolbox")]
#[command(long_about = "
Exercises the glsm vector/matrix/camera/noise kernel.

Examples:
  glsm noise -o noise.pgm -W 512 -H 512      # fractal noise image
  glsm noise -o slice.pgm --z 3.5 --octaves 1
  glsm grid -o wave.obj -r 64 -t 1.5         # animated wave grid
  glsm grid -o terrain.obj --terrain          # noise terrain
  glsm camera turn:40,10 dolly:0,-20 --json  # replay camera input
  glsm ray 640 360                           # unproject a pixel
  glsm check                                 # numeric self checks
  glsm -vv --config scene.yaml camera pan:5,0
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Scene config (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample a 2D noise field into a grayscale PGM image
    #[command(visible_alias = "n")]
    Noise(NoiseArgs),

    /// Write a wave grid or noise terrain as Wavefront OBJ
    #[command(visible_alias = "g")]
    Grid(GridArgs),

    /// Replay pointer input through the orbit camera
    #[command(visible_alias = "cam")]
    Camera(CameraArgs),

    /// Unproject a screen pixel into a world-space ray
    Ray(RayArgs),

    /// Run numeric self checks
    Check(CheckArgs),
}

/// Arguments for the `noise` command.
#[derive(Args)]
struct NoiseArgs {
    /// Output image (.pgm)
    #[arg(short, long)]
    output: PathBuf,

    /// Image width
    #[arg(short = 'W', long, default_value = "256")]
    width: u32,

    /// Image height
    #[arg(short = 'H', long, default_value = "256")]
    height: u32,

    /// Noise cells across the image (overrides config)
    #[arg(short, long)]
    scale: Option<f32>,

    /// Octave count (overrides config)
    #[arg(long)]
    octaves: Option<u32>,

    /// Table seed (overrides config)
    #[arg(long)]
    seed: Option<u32>,

    /// Sample a 3D slice at this depth instead of the 2D field
    #[arg(long)]
    z: Option<f32>,
}

/// Arguments for the `grid` command.
#[derive(Args)]
struct GridArgs {
    /// Output mesh (.obj)
    #[arg(short, long)]
    output: PathBuf,

    /// Cells per side
    #[arg(short, long, default_value = "32")]
    res: u32,

    /// Animation time for the wave grid
    #[arg(short, long, default_value = "0.0")]
    time: f32,

    /// Build a noise terrain instead of the wave grid
    #[arg(long)]
    terrain: bool,

    /// Terrain height multiplier
    #[arg(long, default_value = "0.3")]
    height: f32,
}

/// Arguments for the `camera` command.
#[derive(Args)]
struct CameraArgs {
    /// Input steps, `mode:dx,dy` with mode turn, dolly, pan, light or idle
    steps: Vec<String>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

/// Arguments for the `ray` command.
#[derive(Args)]
struct RayArgs {
    /// Pixel x, from the left edge
    x: f64,

    /// Pixel y, from the top edge
    y: f64,

    /// Camera input steps applied before unprojecting
    #[arg(long = "step")]
    steps: Vec<String>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

/// Arguments for the `check` command.
#[derive(Args)]
struct CheckArgs {
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

/// Installs the fmt subscriber; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt};

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let scene = SceneConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Noise(args) => commands::noise::run(args, &scene, cli.verbose),
        Commands::Grid(args) => commands::grid::run(args, &scene, cli.verbose),
        Commands::Camera(args) => commands::camera::run(args, &scene, cli.verbose),
        Commands::Ray(args) => commands::ray::run(args, &scene, cli.verbose),
        Commands::Check(args) => commands::check::run(args, cli.verbose),
    }
}
