//! Fitting frame labels into the pixel width of their rectangle.
//!
//! Width is estimated from an average character width rather than measured,
//! so the result depends only on the label and two numbers.

use crate::error::{ViewError, ViewResult, require_positive};

/// Marker appended to truncated labels.
pub const ELLIPSIS: &str = "..";

pub const DEFAULT_AVG_CHAR_WIDTH: f64 = 6.0;

/// Characters reserved for padding when a label is truncated.
pub const DEFAULT_TRUNCATION_MARGIN: usize = 2;

/// Rectangles narrower than this many characters get no label at all.
const MIN_LABEL_CHARS: f64 = 3.0;

const TRUNCATION_MARGIN_RANGE: std::ops::RangeInclusive<usize> = 2..=5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelFitter {
    avg_char_width: f64,
    truncation_margin: usize,
}

impl Default for LabelFitter {
    fn default() -> Self {
        Self {
            avg_char_width: DEFAULT_AVG_CHAR_WIDTH,
            truncation_margin: DEFAULT_TRUNCATION_MARGIN,
        }
    }
}

impl LabelFitter {
    pub fn new(avg_char_width: f64, truncation_margin: usize) -> ViewResult<Self> {
        let avg_char_width = require_positive("avg_char_width", avg_char_width)?;
        if !TRUNCATION_MARGIN_RANGE.contains(&truncation_margin) {
            return Err(ViewError::InvalidArgument(format!(
                "truncation_margin must be in {}..={}, got {truncation_margin}",
                TRUNCATION_MARGIN_RANGE.start(),
                TRUNCATION_MARGIN_RANGE.end(),
            )));
        }
        Ok(Self {
            avg_char_width,
            truncation_margin,
        })
    }

    pub fn avg_char_width(&self) -> f64 {
        self.avg_char_width
    }

    pub fn truncation_margin(&self) -> usize {
        self.truncation_margin
    }

    /// Fit `label` into `available_px`.
    ///
    /// Returns an empty string when the space is too small for a meaningful
    /// label, `label` unchanged when it fits, and otherwise a prefix followed
    /// by [`ELLIPSIS`] whose total length is
    /// `floor(available_px / avg_char_width) - truncation_margin` characters.
    /// Fitting an already fitted label returns it unchanged.
    pub fn fit(&self, label: &str, available_px: f64) -> String {
        if available_px.is_nan() || available_px < MIN_LABEL_CHARS * self.avg_char_width {
            return String::new();
        }

        let len = label.chars().count();
        if len as f64 * self.avg_char_width <= available_px {
            return label.to_owned();
        }

        let budget = (available_px / self.avg_char_width).floor() as usize;
        let keep = budget
            .saturating_sub(self.truncation_margin)
            .saturating_sub(ELLIPSIS.len());
        if keep == 0 {
            return String::new();
        }

        let mut fitted: String = label.chars().take(keep).collect();
        fitted.push_str(ELLIPSIS);
        fitted
    }
}

/// Fit `label` with the default truncation margin.
pub fn fit_label(label: &str, available_px: f64, avg_char_width_px: f64) -> ViewResult<String> {
    let fitter = LabelFitter::new(avg_char_width_px, DEFAULT_TRUNCATION_MARGIN)?;
    Ok(fitter.fit(label, available_px))
}
