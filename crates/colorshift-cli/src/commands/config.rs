use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colorshift_core::config::ConfigFormat;
use colorshift_core::curve::Keyframe;
use colorshift_core::effect::ColorShift;
use colorshift_core::pipeline::config::RenderConfig;

#[derive(Args)]
pub struct ConfigArgs {
    /// Print only the effect parameters instead of a full render job
    #[arg(long)]
    pub effect_only: bool,

    /// Write config to a file instead of stdout (a .json path writes JSON
    /// when --effect-only is set)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save a default render job (or effect config).
pub fn run(args: &ConfigArgs) -> Result<()> {
    let effect = ColorShift::<Keyframe>::default().config();

    let text = if args.effect_only {
        let format = args
            .output
            .as_deref()
            .map(ConfigFormat::from_path)
            .unwrap_or_default();
        effect.to_text(format)?
    } else {
        let job = RenderConfig {
            effect,
            ..Default::default()
        };
        toml::to_string_pretty(&job)?
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &text)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        print!("{}", text);
    }

    Ok(())
}
