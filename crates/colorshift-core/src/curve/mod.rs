pub mod keyframe;

use std::sync::Arc;

pub use keyframe::{Interpolation, Keyframe, Point};

/// A time-varying scalar parameter.
///
/// Implementors map a frame index to a value and must be total: every frame
/// index yields a defined value (keyframe tables hold their end values
/// outside the keyed range).
pub trait AnimationCurve: Send + Sync {
    fn evaluate(&self, frame: u64) -> f64;
}

/// A bare number is a constant curve.
impl AnimationCurve for f64 {
    fn evaluate(&self, _frame: u64) -> f64 {
        *self
    }
}

impl<C: AnimationCurve + ?Sized> AnimationCurve for Box<C> {
    fn evaluate(&self, frame: u64) -> f64 {
        (**self).evaluate(frame)
    }
}

impl<C: AnimationCurve + ?Sized> AnimationCurve for Arc<C> {
    fn evaluate(&self, frame: u64) -> f64 {
        (**self).evaluate(frame)
    }
}

impl<C: AnimationCurve + ?Sized> AnimationCurve for &C {
    fn evaluate(&self, frame: u64) -> f64 {
        (**self).evaluate(frame)
    }
}

/// Adapter turning a closure into a curve.
#[derive(Clone, Copy, Debug)]
pub struct FnCurve<F>(pub F);

impl<F> AnimationCurve for FnCurve<F>
where
    F: Fn(u64) -> f64 + Send + Sync,
{
    fn evaluate(&self, frame: u64) -> f64 {
        (self.0)(frame)
    }
}
