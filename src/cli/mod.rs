pub mod completions;
pub mod transform;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::error::{PictureError, Result};
use crate::output::{Printer, Verbosity};
use crate::process::{ExtentPolicy, Transformation};
use crate::settings::Settings;

/// picture - RGB image transformations
#[derive(Parser, Debug)]
#[command(name = "picture")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags accepted before or after any subcommand
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Settings file (default: ./picture.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// How blend and mosaic reconcile pictures of different sizes
    #[arg(long, global = true, value_enum)]
    pub extent: Option<ExtentPolicy>,

    /// Only print warnings and errors
    #[arg(long, short, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print per-step detail
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Invert every colour channel
    Invert(transform::SingleArgs),

    /// Replace each pixel with the mean of its channels
    Grayscale(transform::SingleArgs),

    /// Rotate clockwise by 90, 180 or 270 degrees
    Rotate(transform::RotateArgs),

    /// Mirror horizontally (H) or vertically (V)
    Flip(transform::FlipArgs),

    /// Apply a 3x3 box blur
    Blur(transform::SingleArgs),

    /// Average several pictures together
    Blend(transform::BlendArgs),

    /// Tile several pictures into a mosaic
    Mosaic(transform::MosaicArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Settings and output shared by every transform command.
pub struct Context {
    pub printer: Printer,
    pub policy: ExtentPolicy,
}

impl Context {
    /// Merge settings with command-line overrides.
    pub fn new(global: &GlobalArgs, settings: &Settings) -> Self {
        let verbosity = if global.quiet {
            Verbosity::Quiet
        } else if global.verbose || settings.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };

        Self {
            printer: Printer::new(verbosity),
            policy: global.extent.unwrap_or(settings.extent),
        }
    }
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let Cli { global, command } = cli;

    let job = match command {
        Commands::Invert(args) => args.into_job(Transformation::Invert),
        Commands::Grayscale(args) => args.into_job(Transformation::Grayscale),
        Commands::Rotate(args) => args.into_job(),
        Commands::Flip(args) => args.into_job(),
        Commands::Blur(args) => args.into_job(Transformation::Blur),
        Commands::Blend(args) => args.into_job()?,
        Commands::Mosaic(args) => args.into_job()?,
        Commands::Completions(args) => return completions::run(args),
    };

    let cwd = std::env::current_dir().map_err(|e| PictureError::Io {
        path: PathBuf::from("."),
        message: format!("Failed to read working directory: {}", e),
    })?;
    let settings = Settings::resolve(global.config.as_deref(), &cwd)?;
    let ctx = Context::new(&global, &settings);
    ctx.printer.verbose("Settings", &format!("extent {}", ctx.policy));

    transform::run(job, &ctx)
}
