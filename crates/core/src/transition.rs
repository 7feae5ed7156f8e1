use tracing::trace;

use crate::error::{ViewError, ViewResult};
use crate::transform::{Transform, lerp_transform};

/// A linear tween between two transforms over a fixed duration.
///
/// Holds no clock: the host passes elapsed time from whatever scheduler it
/// runs (timer, animation frame callback, or a single jump to the end).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: Transform,
    to: Transform,
    duration_ms: f64,
}

impl Transition {
    pub fn new(from: Transform, to: Transform, duration_ms: f64) -> ViewResult<Self> {
        if !duration_ms.is_finite() || duration_ms < 0.0 {
            return Err(ViewError::InvalidArgument(format!(
                "transition duration must be finite and >= 0, got {duration_ms}"
            )));
        }
        Ok(Self {
            from,
            to,
            duration_ms,
        })
    }

    pub fn start(&self) -> &Transform {
        &self.from
    }

    pub fn end(&self) -> &Transform {
        &self.to
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Progress in `[0, 1]` after `elapsed_ms`.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms == 0.0 {
            return 1.0;
        }
        let t = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        if t.is_nan() { 0.0 } else { t }
    }

    pub fn sample(&self, elapsed_ms: f64) -> Transform {
        let t = self.progress(elapsed_ms);
        trace!(progress = t, "transition sample");
        lerp_transform(&self.from, &self.to, t)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }
}
