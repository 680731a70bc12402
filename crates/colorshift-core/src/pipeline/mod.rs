pub mod config;
mod orchestrator;
mod types;

pub use orchestrator::{render_range, render_sequence, run_render};
pub use types::{NoOpReporter, ProgressReporter, RenderStage};
