use tracing::debug;

use crate::error::{ViewResult, require_finite, require_positive};
use crate::model::Frame;
use crate::transform::{self, Damping, Transform, ZoomTarget};

/// Pan/zoom state of the clip region.
///
/// Owned by the host and mutated only through [`Viewport::zoom`],
/// [`Viewport::zoom_to_frame`] and [`Viewport::reset`]. The stored center and
/// scale are the effective values (after damping), so [`Viewport::transform`]
/// always reproduces the transform returned by the last call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    clip_width: f64,
    clip_mid_y: f64,
    initial_center_x: f64,
    center_x: f64,
    scale: f64,
}

impl Viewport {
    /// Create a viewport centered on the middle of the clip region at scale 1.
    pub fn new(clip_width: f64, clip_mid_y: f64) -> ViewResult<Self> {
        let clip_width = require_positive("clip_width", clip_width)?;
        Self::with_initial_center(clip_width, clip_mid_y, clip_width * 0.5)
    }

    /// Create a viewport whose reset position is `initial_center_x`.
    pub fn with_initial_center(
        clip_width: f64,
        clip_mid_y: f64,
        initial_center_x: f64,
    ) -> ViewResult<Self> {
        let clip_width = require_positive("clip_width", clip_width)?;
        let clip_mid_y = require_finite("clip_mid_y", clip_mid_y)?;
        let initial_center_x = require_finite("initial_center_x", initial_center_x)?;
        Ok(Self {
            clip_width,
            clip_mid_y,
            initial_center_x,
            center_x: initial_center_x,
            scale: 1.0,
        })
    }

    pub fn clip_width(&self) -> f64 {
        self.clip_width
    }

    pub fn clip_mid_y(&self) -> f64 {
        self.clip_mid_y
    }

    pub fn initial_center_x(&self) -> f64 {
        self.initial_center_x
    }

    /// Content x-coordinate currently shown at the middle of the clip region.
    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    /// Effective horizontal magnification.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn is_reset(&self) -> bool {
        self.scale == 1.0 && self.center_x == self.initial_center_x
    }

    /// The transform for the current state.
    pub fn transform(&self) -> Transform {
        Transform::centered(self, self.center_x, self.scale)
    }

    /// Zoom to `target`. Later calls replace earlier ones.
    pub fn zoom(&mut self, target: ZoomTarget, damping: Damping) -> ViewResult<Transform> {
        let next = transform::compute(target, self, damping)?;
        self.center_x = next.pivot_x;
        self.scale = next.scale_x;
        debug!(
            center_x = self.center_x,
            scale = self.scale,
            requested_scale = target.scale,
            "zoom"
        );
        Ok(next)
    }

    /// Zoom so that `frame` fills the clip region (minus damping).
    pub fn zoom_to_frame(&mut self, frame: &Frame, damping: Damping) -> ViewResult<Transform> {
        let target = transform::zoom_target_for_frame(frame, self)?;
        self.zoom(target, damping)
    }

    /// Return to the initial center at scale 1.
    pub fn reset(&mut self) -> Transform {
        self.center_x = self.initial_center_x;
        self.scale = 1.0;
        debug!(center_x = self.center_x, "reset viewport");
        transform::reset(self)
    }
}
