use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colorshift_core::io::image_io::load_rgba;

use super::ShiftArgs;
use crate::summary::print_properties;

#[derive(Args)]
pub struct InfoArgs {
    /// Frame index to evaluate the shift curves at
    #[arg(short, long, default_value = "1")]
    pub frame: u64,

    /// Image whose dimensions are used to resolve pixel offsets
    #[arg(long)]
    pub image: Option<PathBuf>,

    #[command(flatten)]
    pub shift: ShiftArgs,

    /// Print properties as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let effect = args.shift.build_effect()?;

    let dimensions = match args.image {
        Some(ref path) => {
            let image = load_rgba(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            Some((image.width(), image.height()))
        }
        None => None,
    };

    let properties = effect.properties_at(args.frame, dimensions);

    if args.json {
        let report = serde_json::json!({
            "effect": effect.info(),
            "frame": args.frame,
            "properties": properties,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_properties(&effect.info(), args.frame, dimensions, &properties);
    }

    Ok(())
}
