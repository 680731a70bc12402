use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colorshift_core::io::image_io::{load_rgba, save_rgba};

use super::ShiftArgs;

#[derive(Args)]
pub struct ApplyArgs {
    /// Input image file (PNG recommended to keep alpha)
    pub file: PathBuf,

    /// Frame index the shift curves are evaluated at
    #[arg(short, long, default_value = "1")]
    pub frame: u64,

    #[command(flatten)]
    pub shift: ShiftArgs,

    /// Output file path
    #[arg(short, long, default_value = "shifted.png")]
    pub output: PathBuf,
}

pub fn run(args: &ApplyArgs) -> Result<()> {
    let effect = args.shift.build_effect()?;

    let source = load_rgba(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    println!("Loaded {}x{} image", source.width(), source.height());

    let offsets = effect.offsets_at(args.frame, source.width(), source.height())?;
    let [rx, ry, gx, gy, bx, by, ax, ay] = offsets.to_array();
    println!(
        "Frame {}: red ({}, {}), green ({}, {}), blue ({}, {}), alpha ({}, {}) px",
        args.frame, rx, ry, gx, gy, bx, by, ax, ay
    );

    let shifted = effect.apply(args.frame, &source)?;
    save_rgba(&shifted, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
