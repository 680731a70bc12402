/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Minimum frame count to use frame-level Rayon parallelism.
pub const PARALLEL_FRAME_THRESHOLD: usize = 4;

/// Bytes per interleaved RGBA8 pixel.
pub const RGBA_CHANNEL_COUNT: usize = 4;

/// Default red horizontal shift, as a fraction of image width.
pub const DEFAULT_RED_X: f64 = -0.05;

/// Default green horizontal shift, as a fraction of image width.
pub const DEFAULT_GREEN_X: f64 = 0.05;

/// Lower bound of the editable shift range shown to hosts.
pub const SHIFT_MIN: f64 = -1.0;

/// Upper bound of the editable shift range shown to hosts.
pub const SHIFT_MAX: f64 = 1.0;

/// Bisection steps used to invert the x(t) polynomial of a bezier segment.
/// 48 halvings resolve t well below f64 frame precision.
pub const BEZIER_SOLVE_ITERATIONS: usize = 48;

/// Default output file prefix for rendered sequences.
pub const DEFAULT_FILE_PREFIX: &str = "frame_";
