use serde::{Deserialize, Serialize};

use crate::consts::BEZIER_SOLVE_ITERATIONS;

use super::AnimationCurve;

/// How the segment starting at a point is interpolated towards the next one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interpolation {
    /// Cubic bezier shaped by the point handles.
    #[default]
    Bezier,
    Linear,
    /// Hold the starting value until the next point.
    Constant,
}

impl std::fmt::Display for Interpolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bezier => write!(f, "Bezier"),
            Self::Linear => write!(f, "Linear"),
            Self::Constant => write!(f, "Constant"),
        }
    }
}

/// Bezier handle position, as fractions of the segment's frame and value span.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Handle {
    pub x: f64,
    pub y: f64,
}

impl Handle {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

fn default_handle_left() -> Handle {
    Handle::new(0.5, 1.0)
}

fn default_handle_right() -> Handle {
    Handle::new(0.5, 0.0)
}

/// A single keyed value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub frame: u64,
    pub value: f64,
    #[serde(default)]
    pub interpolation: Interpolation,
    /// Incoming handle, used by the segment that ends at this point.
    #[serde(default = "default_handle_left")]
    pub handle_left: Handle,
    /// Outgoing handle, used by the segment that starts at this point.
    #[serde(default = "default_handle_right")]
    pub handle_right: Handle,
}

impl Point {
    pub fn new(frame: u64, value: f64, interpolation: Interpolation) -> Self {
        Self {
            frame,
            value,
            interpolation,
            handle_left: default_handle_left(),
            handle_right: default_handle_right(),
        }
    }
}

/// Keyframe table: an ordered list of points, one per frame.
///
/// Frames before the first point hold the first value and frames after the
/// last point hold the last value. A table without points evaluates to 0.0.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "KeyframeRepr", into = "KeyframeRepr")]
pub struct Keyframe {
    points: Vec<Point>,
}

#[derive(Serialize, Deserialize)]
struct KeyframeRepr {
    #[serde(default)]
    points: Vec<Point>,
}

impl From<KeyframeRepr> for Keyframe {
    fn from(repr: KeyframeRepr) -> Self {
        Keyframe::from_points(repr.points)
    }
}

impl From<Keyframe> for KeyframeRepr {
    fn from(keyframe: Keyframe) -> Self {
        KeyframeRepr {
            points: keyframe.points,
        }
    }
}

impl Keyframe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-point table holding `value` for every frame.
    pub fn constant(value: f64) -> Self {
        Self {
            points: vec![Point::new(1, value, Interpolation::default())],
        }
    }

    /// Build a table from unordered points. Later points win on duplicate frames.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let mut keyframe = Self::new();
        for point in points {
            keyframe.add_point(point);
        }
        keyframe
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Insert a point, replacing any existing point on the same frame.
    pub fn add_point(&mut self, point: Point) {
        match self.points.binary_search_by_key(&point.frame, |p| p.frame) {
            Ok(i) => self.points[i] = point,
            Err(i) => self.points.insert(i, point),
        }
    }

    pub fn remove_point(&mut self, frame: u64) -> Option<Point> {
        self.points
            .binary_search_by_key(&frame, |p| p.frame)
            .ok()
            .map(|i| self.points.remove(i))
    }

    /// The held value when the table has exactly one point.
    pub fn as_constant(&self) -> Option<f64> {
        match self.points.as_slice() {
            [only] => Some(only.value),
            _ => None,
        }
    }

    /// True when every value and handle is a finite number.
    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|p| {
            p.value.is_finite()
                && p.handle_left.x.is_finite()
                && p.handle_left.y.is_finite()
                && p.handle_right.x.is_finite()
                && p.handle_right.y.is_finite()
        })
    }

    pub fn value_at(&self, frame: u64) -> f64 {
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.0,
        };
        if frame <= first.frame {
            return first.value;
        }
        if frame >= last.frame {
            return last.value;
        }

        // First point strictly after `frame`; the segment starts one before it.
        let next = self.points.partition_point(|p| p.frame <= frame);
        let start = &self.points[next - 1];
        let end = &self.points[next];
        interpolate_segment(start, end, frame as f64)
    }
}

impl AnimationCurve for Keyframe {
    fn evaluate(&self, frame: u64) -> f64 {
        self.value_at(frame)
    }
}

impl From<f64> for Keyframe {
    fn from(value: f64) -> Self {
        Keyframe::constant(value)
    }
}

fn interpolate_segment(start: &Point, end: &Point, x: f64) -> f64 {
    let x0 = start.frame as f64;
    let x1 = end.frame as f64;
    let dx = x1 - x0;
    let dy = end.value - start.value;

    match start.interpolation {
        Interpolation::Constant => start.value,
        Interpolation::Linear => start.value + dy * (x - x0) / dx,
        Interpolation::Bezier => {
            let c1 = (
                x0 + start.handle_right.x.clamp(0.0, 1.0) * dx,
                start.value + start.handle_right.y * dy,
            );
            let c2 = (
                x0 + end.handle_left.x.clamp(0.0, 1.0) * dx,
                start.value + end.handle_left.y * dy,
            );
            let t = solve_bezier_t(x0, c1.0, c2.0, x1, x);
            cubic_bezier(start.value, c1.1, c2.1, end.value, t)
        }
    }
}

fn cubic_bezier(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Find t in [0, 1] with x(t) == target by bisection.
fn solve_bezier_t(x0: f64, x1: f64, x2: f64, x3: f64, target: f64) -> f64 {
    let mut lo = 0.0f64;
    let mut hi = 1.0f64;
    for _ in 0..BEZIER_SOLVE_ITERATIONS {
        let mid = 0.5 * (lo + hi);
        if cubic_bezier(x0, x1, x2, x3, mid) < target {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}
