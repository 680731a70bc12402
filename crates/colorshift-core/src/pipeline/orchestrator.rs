use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::info;

use crate::consts::PARALLEL_FRAME_THRESHOLD;
use crate::curve::AnimationCurve;
use crate::effect::ColorShift;
use crate::error::{ColorShiftError, Result};
use crate::frame::RgbaFrame;
use crate::io::image_io::{load_rgba, save_rgba};

use super::config::{FrameRangeConfig, RenderConfig};
use super::types::{ProgressReporter, RenderStage};

/// Apply `effect` to `source` once per frame index and hand each result to `sink`.
///
/// Frames are independent, so long sequences are spread over the Rayon pool
/// and `sink` may be called from several threads in any order. The first
/// error from the effect or the sink stops the sequence.
pub fn render_sequence<C, F>(
    effect: &ColorShift<C>,
    source: &RgbaFrame,
    frames: &[u64],
    reporter: &dyn ProgressReporter,
    sink: F,
) -> Result<()>
where
    C: AnimationCurve,
    F: Fn(u64, RgbaFrame) -> Result<()> + Send + Sync,
{
    if frames.is_empty() {
        return Err(ColorShiftError::EmptySequence);
    }
    source.validate()?;

    let counter = AtomicUsize::new(0);
    let render_one =
        |frame: u64| render_frame(effect, source, frame, reporter, &sink, &counter);

    if frames.len() >= PARALLEL_FRAME_THRESHOLD {
        frames.par_iter().try_for_each(|&frame| render_one(frame))
    } else {
        frames.iter().try_for_each(|&frame| render_one(frame))
    }
}

/// Like [`render_sequence`], but walks an inclusive frame range without
/// materialising its indices.
pub fn render_range<C, F>(
    effect: &ColorShift<C>,
    source: &RgbaFrame,
    frames: &FrameRangeConfig,
    reporter: &dyn ProgressReporter,
    sink: F,
) -> Result<()>
where
    C: AnimationCurve,
    F: Fn(u64, RgbaFrame) -> Result<()> + Send + Sync,
{
    frames.validate()?;
    source.validate()?;

    let counter = AtomicUsize::new(0);
    let render_one =
        |frame: u64| render_frame(effect, source, frame, reporter, &sink, &counter);

    if frames.len() >= PARALLEL_FRAME_THRESHOLD {
        frames.indices().into_par_iter().try_for_each(render_one)
    } else {
        frames.indices().try_for_each(render_one)
    }
}

fn render_frame<C, F>(
    effect: &ColorShift<C>,
    source: &RgbaFrame,
    frame: u64,
    reporter: &dyn ProgressReporter,
    sink: &F,
    counter: &AtomicUsize,
) -> Result<()>
where
    C: AnimationCurve,
    F: Fn(u64, RgbaFrame) -> Result<()>,
{
    let shifted = effect.apply(frame, source)?;
    sink(frame, shifted)?;
    let done = counter.fetch_add(1, Ordering::Relaxed) + 1;
    reporter.advance(done);
    Ok(())
}

/// Render the frame range of `config` to PNG files and return the number of
/// frames written.
pub fn run_render(config: &RenderConfig, reporter: Arc<dyn ProgressReporter>) -> Result<usize> {
    config.frames.validate()?;
    let effect = ColorShift::from_config(&config.effect)?;

    reporter.begin_stage(RenderStage::Loading, None);
    let source = load_rgba(&config.input)?;
    reporter.finish_stage();
    info!(
        width = source.width(),
        height = source.height(),
        input = %config.input.display(),
        "Loaded source image"
    );

    std::fs::create_dir_all(&config.output_dir)?;

    let total = config.frames.len();
    reporter.begin_stage(RenderStage::Rendering, Some(total));
    render_range(&effect, &source, &config.frames, reporter.as_ref(), |frame, shifted| {
        save_rgba(&shifted, &config.output_path(frame))
    })?;
    reporter.finish_stage();

    info!(
        frames = total,
        output_dir = %config.output_dir.display(),
        "Sequence rendered"
    );
    Ok(total)
}
