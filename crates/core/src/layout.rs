use flame_view_protocol::Point;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::label::LabelFitter;
use crate::model::Frame;
use crate::transform::Transform;

pub const DEFAULT_MIN_LABEL_WIDTH: f64 = 60.0;
pub const DEFAULT_LABEL_INSET: f64 = 4.0;
pub const DEFAULT_LABEL_BASELINE: f64 = 11.5;
pub const DEFAULT_FONT_SIZE: f64 = 11.0;

/// A fitted label anchored in screen coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLabel {
    pub frame_index: usize,
    pub position: Point,
    pub text: String,
}

/// Rules for placing the text layer over a zoomed frame set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelLayout {
    pub fitter: LabelFitter,
    /// Frames narrower than this on screen get no label.
    pub min_label_width: f64,
    /// Gap between the frame's left edge and the text.
    pub inset: f64,
    /// Offset from the frame's top to the text baseline.
    pub baseline: f64,
    pub font_size: f64,
}

impl Default for LabelLayout {
    fn default() -> Self {
        Self {
            fitter: LabelFitter::default(),
            min_label_width: DEFAULT_MIN_LABEL_WIDTH,
            inset: DEFAULT_LABEL_INSET,
            baseline: DEFAULT_LABEL_BASELINE,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl LabelLayout {
    /// Place labels for every frame that is on screen and wide enough.
    ///
    /// Only the on-screen part of a frame counts toward its label width, and
    /// a frame that starts left of the clip region has its label pinned to
    /// the left edge.
    pub fn layout(
        &self,
        frames: &[Frame],
        transform: &Transform,
        clip_width: f64,
    ) -> Vec<PlacedLabel> {
        let mut labels = Vec::new();

        for (index, frame) in frames.iter().enumerate() {
            let left = transform.apply_x(frame.x).max(0.0);
            let right = transform.apply_x(frame.x + frame.width).min(clip_width);
            let visible_width = right - left;
            if visible_width < self.min_label_width {
                continue;
            }

            let text = self.fitter.fit(&frame.label, visible_width - self.inset);
            if text.is_empty() {
                continue;
            }

            labels.push(PlacedLabel {
                frame_index: index,
                position: Point::new(left + self.inset, frame.y + self.baseline),
                text,
            });
        }

        trace!(
            placed = labels.len(),
            frames = frames.len(),
            "label layout"
        );
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Viewport;
    use crate::transform::{self, Damping, ZoomTarget};

    fn frames() -> Vec<Frame> {
        vec![
            Frame::new(0.0, 40.0, 1200.0, 15.0, "root", "a"),
            Frame::new(0.0, 55.0, 300.0, 15.0, "parse_arguments_and_environment", "b"),
            Frame::new(300.0, 55.0, 30.0, 15.0, "tiny", "c"),
            Frame::new(900.0, 55.0, 300.0, 15.0, "render", "d"),
        ]
    }

    #[test]
    fn top_level_layout_skips_narrow_frames() {
        let vp = Viewport::new(1200.0, 50.0).expect("valid viewport");
        let labels = LabelLayout::default().layout(&frames(), &transform::reset(&vp), 1200.0);

        let indices: Vec<_> = labels.iter().map(|l| l.frame_index).collect();
        assert_eq!(indices, vec![0, 1, 3]);
        assert_eq!(labels[0].text, "root");
        assert_eq!(labels[0].position, Point::new(4.0, 51.5));
        // 31 chars at 6 px fit in the 296 px left after the inset.
        assert_eq!(labels[1].text, "parse_arguments_and_environment");
    }

    #[test]
    fn zoom_reveals_small_frames_and_culls_offscreen() {
        let mut vp = Viewport::new(1200.0, 50.0).expect("valid viewport");
        let t = vp
            .zoom(ZoomTarget::new(315.0, 10.0), Damping::None)
            .expect("zoom");
        let labels = LabelLayout::default().layout(&frames(), &t, 1200.0);

        let indices: Vec<_> = labels.iter().map(|l| l.frame_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);

        // The root starts off screen; its label is pinned to the left edge.
        assert_eq!(labels[0].position.x, 4.0);
        // "tiny" now spans 300 px starting at x = 450.
        assert_eq!(labels[2].text, "tiny");
        assert!((labels[2].position.x - 454.0).abs() < 1e-9);
    }

    #[test]
    fn frames_with_empty_labels_are_skipped() {
        let vp = Viewport::new(1200.0, 50.0).expect("valid viewport");
        let frames = vec![
            Frame::new(0.0, 40.0, 600.0, 15.0, "", "a"),
            Frame::new(600.0, 40.0, 600.0, 15.0, "idle", "b"),
        ];
        let labels = LabelLayout::default().layout(&frames, &transform::reset(&vp), 1200.0);
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].frame_index, 1);
        assert_eq!(labels[0].text, "idle");
    }

    #[test]
    fn frames_outside_visible_range_get_no_label() {
        let mut vp = Viewport::new(1200.0, 50.0).expect("valid viewport");
        let t = vp
            .zoom(ZoomTarget::new(315.0, 10.0), Damping::None)
            .expect("zoom");
        // Visible content range is (255, 375).
        let frames = vec![
            Frame::new(0.0, 40.0, 200.0, 15.0, "left_of_view", "a"),
            Frame::new(400.0, 40.0, 200.0, 15.0, "right_of_view", "b"),
            Frame::new(250.0, 40.0, 20.0, 15.0, "straddles_left_edge", "c"),
        ];
        let labels = LabelLayout::default().layout(&frames, &t, 1200.0);
        assert_eq!(labels.len(), 1);
        // 250..270 maps to -50..150: only 150 px are on screen.
        assert_eq!(labels[0].frame_index, 2);
        assert_eq!(labels[0].position.x, 4.0);
        // floor(146 / 6) - 2 = 22 visible chars; the 19-char label fits whole.
        assert_eq!(labels[0].text, "straddles_left_edge");
    }

    #[test]
    fn long_labels_are_truncated_to_visible_width() {
        let layout = LabelLayout::default();
        let frames = vec![Frame::new(0.0, 0.0, 100.0, 15.0, "a_rather_long_function_name", "x")];
        let vp = Viewport::new(1200.0, 50.0).expect("valid viewport");
        let labels = layout.layout(&frames, &transform::reset(&vp), 1200.0);
        // floor(96 / 6) - 2 = 14 visible chars.
        assert_eq!(labels[0].text, "a_rather_lon..");
    }
}
