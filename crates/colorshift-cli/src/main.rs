mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "colorshift", about = "Color channel shift effect for frames and sequences")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shift the channels of a single image at one frame index
    Apply(commands::apply::ApplyArgs),
    /// Render a frame range of a still image to a PNG sequence
    Render(commands::render::RenderArgs),
    /// Print or save a default config
    Config(commands::config::ConfigArgs),
    /// Show effect parameters at a frame index
    Info(commands::info::InfoArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Apply(args) => commands::apply::run(args),
        Commands::Render(args) => commands::render::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Info(args) => commands::info::run(args),
    }
}
