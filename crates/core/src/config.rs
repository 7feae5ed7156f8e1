use serde::{Deserialize, Serialize};

use crate::error::{ViewError, ViewResult, require_finite, require_positive};
use crate::label::{DEFAULT_AVG_CHAR_WIDTH, DEFAULT_TRUNCATION_MARGIN, LabelFitter};
use crate::layout::{
    DEFAULT_FONT_SIZE, DEFAULT_LABEL_BASELINE, DEFAULT_LABEL_INSET, DEFAULT_MIN_LABEL_WIDTH,
    LabelLayout,
};
use crate::model::Viewport;
use crate::transform::{DEFAULT_DAMPING, Damping, Transform};
use crate::transition::Transition;

/// Viewer setup. Every field has a default, so hosts can deserialize a
/// partial JSON document and override only what they need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub clip_width: f64,
    pub clip_mid_y: f64,
    /// Reset position; `None` means the middle of the clip region.
    pub initial_center_x: Option<f64>,
    /// Zoom-in damping factor; `None` disables damping.
    pub damping: Option<f64>,
    pub avg_char_width: f64,
    pub truncation_margin: usize,
    pub min_label_width: f64,
    pub label_inset: f64,
    pub label_baseline: f64,
    pub font_size: f64,
    pub transition_ms: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            clip_width: 1200.0,
            clip_mid_y: 50.0,
            initial_center_x: None,
            damping: Some(DEFAULT_DAMPING),
            avg_char_width: DEFAULT_AVG_CHAR_WIDTH,
            truncation_margin: DEFAULT_TRUNCATION_MARGIN,
            min_label_width: DEFAULT_MIN_LABEL_WIDTH,
            label_inset: DEFAULT_LABEL_INSET,
            label_baseline: DEFAULT_LABEL_BASELINE,
            font_size: DEFAULT_FONT_SIZE,
            transition_ms: 300.0,
        }
    }
}

impl ViewerConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json_str(json: &str) -> ViewResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ViewResult<()> {
        self.viewport()?;
        self.label_layout()?;
        self.damping().validate()?;
        if !self.transition_ms.is_finite() || self.transition_ms < 0.0 {
            return Err(ViewError::InvalidArgument(format!(
                "transition_ms must be finite and >= 0, got {}",
                self.transition_ms
            )));
        }
        Ok(())
    }

    pub fn damping(&self) -> Damping {
        self.damping.map_or(Damping::None, Damping::Factor)
    }

    pub fn viewport(&self) -> ViewResult<Viewport> {
        match self.initial_center_x {
            Some(center) => Viewport::with_initial_center(self.clip_width, self.clip_mid_y, center),
            None => Viewport::new(self.clip_width, self.clip_mid_y),
        }
    }

    pub fn label_fitter(&self) -> ViewResult<LabelFitter> {
        LabelFitter::new(self.avg_char_width, self.truncation_margin)
    }

    pub fn label_layout(&self) -> ViewResult<LabelLayout> {
        let min_label_width = require_finite("min_label_width", self.min_label_width)?;
        if min_label_width < 0.0 {
            return Err(ViewError::InvalidArgument(format!(
                "min_label_width must be >= 0, got {min_label_width}"
            )));
        }
        Ok(LabelLayout {
            fitter: self.label_fitter()?,
            min_label_width,
            inset: require_finite("label_inset", self.label_inset)?,
            baseline: require_finite("label_baseline", self.label_baseline)?,
            font_size: require_positive("font_size", self.font_size)?,
        })
    }

    pub fn transition(&self, from: Transform, to: Transform) -> ViewResult<Transition> {
        Transition::new(from, to, self.transition_ms)
    }
}
