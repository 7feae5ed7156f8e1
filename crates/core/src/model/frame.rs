use flame_view_protocol::Rect;
use serde::{Deserialize, Serialize};

/// One rectangle of the flame graph: a profiled call-stack entry.
///
/// `x` and `width` are in content units (time or samples), `y` and `height`
/// in pixels. Frames are owned by the host and never mutated by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Short display text.
    pub label: String,
    /// Host-defined category, used to pick a color.
    pub color_id: String,
}

impl Frame {
    pub fn new(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        label: impl Into<String>,
        color_id: impl Into<String>,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            label: label.into(),
            color_id: color_id.into(),
        }
    }

    /// Horizontal midpoint in content units.
    pub fn center_x(&self) -> f64 {
        self.x + 0.5 * self.width
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_midpoint_of_span() {
        let frame = Frame::new(100.0, 20.0, 50.0, 15.0, "main", "a1b2c3");
        assert_eq!(frame.center_x(), 125.0);
        assert_eq!(frame.rect(), Rect::new(100.0, 20.0, 50.0, 15.0));
    }

    #[test]
    fn deserializes_from_host_json() {
        let frame: Frame = serde_json::from_str(
            r#"{"x":0,"y":40,"width":1200,"height":15,"label":"root","color_id":"e63946"}"#,
        )
        .expect("valid frame");
        assert_eq!(frame.label, "root");
        assert_eq!(frame.width, 1200.0);
    }
}
