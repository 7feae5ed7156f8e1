//! Viewport transform: centering a content x-coordinate in the clip region
//! and scaling the x-axis around it.
//!
//! A [`Transform`] maps a content x-coordinate to screen space as
//! `(x - pivot_x) * scale_x + pivot_x + translate_x`. The y-axis is never
//! scaled, so stack depth layering is preserved at every zoom level.

use flame_view_protocol::Point;
use serde::{Deserialize, Serialize};

use crate::error::{ViewError, ViewResult, require_finite, require_positive};
use crate::model::{Frame, Viewport};

/// Default damping applied to zoom-in requests.
pub const DEFAULT_DAMPING: f64 = 0.9;

/// A zoom request: the content x-coordinate to center and the desired
/// horizontal magnification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTarget {
    pub center_x: f64,
    pub scale: f64,
}

impl ZoomTarget {
    pub fn new(center_x: f64, scale: f64) -> Self {
        Self { center_x, scale }
    }
}

/// Margin policy for zoom-in requests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Damping {
    /// Use the requested scale as-is; the target fills the clip region.
    None,
    /// Multiply the requested scale by a factor in `(0, 1]`.
    Factor(f64),
}

impl Default for Damping {
    fn default() -> Self {
        Damping::Factor(DEFAULT_DAMPING)
    }
}

impl Damping {
    pub fn validate(self) -> ViewResult<Self> {
        match self {
            Damping::None => Ok(self),
            Damping::Factor(f) if f.is_finite() && f > 0.0 && f <= 1.0 => Ok(self),
            Damping::Factor(f) => Err(ViewError::InvalidArgument(format!(
                "damping factor must be in (0, 1], got {f}"
            ))),
        }
    }

    /// Effective scale for a zoom-in request. Never drops below 1 so a damped
    /// zoom cannot pull the view out past the top level.
    fn apply(self, scale: f64) -> f64 {
        match self {
            Damping::None => scale,
            Damping::Factor(f) => (scale * f).max(1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translate_x: f64,
    pub scale_x: f64,
    pub pivot_x: f64,
    pub pivot_y: f64,
}

impl Transform {
    /// Center content coordinate `center_x` in the clip region at `scale`.
    pub(crate) fn centered(viewport: &Viewport, center_x: f64, scale: f64) -> Self {
        Self {
            translate_x: viewport.initial_center_x() - center_x,
            scale_x: scale,
            pivot_x: center_x,
            pivot_y: viewport.clip_mid_y(),
        }
    }

    /// Content x to screen x.
    pub fn apply_x(&self, x: f64) -> f64 {
        (x - self.pivot_x) * self.scale_x + self.pivot_x + self.translate_x
    }

    /// Screen x back to content x.
    pub fn invert_x(&self, screen_x: f64) -> f64 {
        (screen_x - self.pivot_x - self.translate_x) / self.scale_x + self.pivot_x
    }

    pub fn apply(&self, point: Point) -> Point {
        Point::new(self.apply_x(point.x), point.y)
    }

    /// Horizontal offset of the equivalent `matrix(scale_x 0 0 1 offset 0)`.
    pub fn matrix_offset_x(&self) -> f64 {
        self.pivot_x * (1.0 - self.scale_x) + self.translate_x
    }

    /// Content x-range shown in a clip region `clip_width` pixels wide.
    pub fn visible_range(&self, clip_width: f64) -> (f64, f64) {
        (self.invert_x(0.0), self.invert_x(clip_width))
    }
}

/// Compute the transform that centers `target.center_x` and magnifies the
/// x-axis by `target.scale` (damped).
///
/// Requests below scale 1 would zoom out past the top level and return
/// exactly [`reset`]. At scale 1 the target is still centered.
pub fn compute(
    target: ZoomTarget,
    viewport: &Viewport,
    damping: Damping,
) -> ViewResult<Transform> {
    let scale = require_positive("scale", target.scale)?;
    let center_x = require_finite("center_x", target.center_x)?;
    let damping = damping.validate()?;

    if scale < 1.0 {
        return Ok(reset(viewport));
    }

    Ok(Transform::centered(viewport, center_x, damping.apply(scale)))
}

/// The top-level transform: initial center, scale 1.
pub fn reset(viewport: &Viewport) -> Transform {
    Transform::centered(viewport, viewport.initial_center_x(), 1.0)
}

/// Linear blend between two transforms, component by component.
///
/// `t` is clamped to `[0, 1]`; `t = 0` yields `from` and `t = 1` yields `to`
/// exactly.
pub fn interpolate(from: &Transform, to: &Transform, t: f64) -> ViewResult<Transform> {
    let t = require_finite("t", t)?.clamp(0.0, 1.0);
    Ok(lerp_transform(from, to, t))
}

pub(crate) fn lerp_transform(from: &Transform, to: &Transform, t: f64) -> Transform {
    let lerp = |a: f64, b: f64| a * (1.0 - t) + b * t;
    Transform {
        translate_x: lerp(from.translate_x, to.translate_x),
        scale_x: lerp(from.scale_x, to.scale_x),
        pivot_x: lerp(from.pivot_x, to.pivot_x),
        pivot_y: lerp(from.pivot_y, to.pivot_y),
    }
}

/// The zoom request issued by double-clicking `frame`: center on the frame
/// and magnify until it spans the clip width.
pub fn zoom_target_for_frame(frame: &Frame, viewport: &Viewport) -> ViewResult<ZoomTarget> {
    let width = require_positive("frame width", frame.width)?;
    Ok(ZoomTarget::new(frame.center_x(), viewport.clip_width() / width))
}

/// Index of the frontmost frame under a screen point. Later frames are drawn
/// on top of earlier ones.
pub fn hit_test(frames: &[Frame], transform: &Transform, screen: Point) -> Option<usize> {
    let content = Point::new(transform.invert_x(screen.x), screen.y);
    frames.iter().rposition(|frame| frame.rect().contains(content))
}
