use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use colorshift_core::pipeline::config::RenderConfig;
use colorshift_core::pipeline::{run_render, ProgressReporter, RenderStage};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use super::ShiftArgs;
use crate::summary::print_render_summary;

#[derive(Args)]
pub struct RenderArgs {
    /// Input still image (overrides the job file)
    pub file: Option<PathBuf>,

    /// Render job file (TOML)
    #[arg(long)]
    pub job: Option<PathBuf>,

    /// First frame index to render
    #[arg(long)]
    pub start: Option<u64>,

    /// Last frame index to render (inclusive)
    #[arg(long)]
    pub end: Option<u64>,

    /// Output file name prefix
    #[arg(long)]
    pub prefix: Option<String>,

    #[command(flatten)]
    pub shift: ShiftArgs,

    /// Output directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// Drives an indicatif bar from the render stages.
struct BarReporter {
    bar: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: RenderStage, total_items: Option<usize>) {
        self.bar.set_message(stage.to_string());
        self.bar.set_length(total_items.unwrap_or(1) as u64);
        self.bar.set_position(0);
    }

    fn advance(&self, items_done: usize) {
        // Workers report out of order; never move the bar backwards.
        if items_done as u64 > self.bar.position() {
            self.bar.set_position(items_done as u64);
        }
    }

    fn finish_stage(&self) {
        if let Some(len) = self.bar.length() {
            self.bar.set_position(len);
        }
    }
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let config = build_config(args)?;
    print_render_summary(&config);

    let bar = ProgressBar::new(1);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg:20} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let reporter = Arc::new(BarReporter { bar: bar.clone() });

    let written = run_render(&config, reporter)?;

    bar.finish_with_message("Done");
    info!(frames = written, "Render finished");
    println!(
        "\n{} frame(s) saved to {}",
        written,
        config.output_dir.display()
    );

    Ok(())
}

fn build_config(args: &RenderArgs) -> Result<RenderConfig> {
    let mut config = match args.job {
        Some(ref path) => RenderConfig::load(path)
            .with_context(|| format!("Failed to read render job {}", path.display()))?,
        None => {
            let Some(ref file) = args.file else {
                anyhow::bail!("An input image or --job file is required");
            };
            RenderConfig {
                input: file.clone(),
                ..Default::default()
            }
        }
    };

    if let Some(ref file) = args.file {
        config.input = file.clone();
    }
    if let Some(ref dir) = args.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(start) = args.start {
        config.frames.start = start;
    }
    if let Some(end) = args.end {
        config.frames.end = end;
    }
    if let Some(ref prefix) = args.prefix {
        config.file_prefix = prefix.clone();
    }
    config.effect = args.shift.merge_into(&config.effect)?;
    config.frames.validate()?;

    Ok(config)
}
