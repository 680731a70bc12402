/// Sequence rendering stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderStage {
    Loading,
    /// Shifting and writing each output frame.
    Rendering,
}

impl std::fmt::Display for RenderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading source"),
            Self::Rendering => write!(f, "Rendering frames"),
        }
    }
}

/// Thread-safe progress reporting for sequence rendering.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new stage has started. `total_items` is the number of work items in
    /// this stage (e.g., frame count), if known.
    fn begin_stage(&self, _stage: RenderStage, _total_items: Option<usize>) {}

    /// Work items completed so far within the current stage. May be called
    /// from several worker threads.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
