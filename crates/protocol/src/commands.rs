use serde::{Deserialize, Serialize};

use crate::theme::ThemeToken;
use crate::types::{Point, Rect};

/// A single, stateless render instruction.
///
/// The core emits a `Vec<RenderCommand>` for each view. Renderers consume
/// this list sequentially. Each command carries all the data it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Draw a filled rectangle in content coordinates, with a logical frame
    /// identifier for hit-testing and the host's own category id.
    DrawRect {
        rect: Rect,
        color: ThemeToken,
        border_color: Option<ThemeToken>,
        color_id: Option<String>,
        frame_id: Option<u64>,
    },

    /// Draw a text string at a position in screen coordinates.
    DrawText {
        position: Point,
        text: String,
        color: ThemeToken,
        font_size: f64,
        align: TextAlign,
        frame_id: Option<u64>,
    },

    /// Push an affine transform (applied to all subsequent commands until
    /// the matching `PopTransform`). Maps `x` to `x * scale.x + translate.x`
    /// and `y` to `y * scale.y + translate.y`.
    PushTransform { translate: Point, scale: Point },

    /// Pop the most recent transform.
    PopTransform,

    /// Begin a logical group (e.g. the rect or text layer).
    BeginGroup { id: String, label: Option<String> },

    /// End the current group.
    EndGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_serialize_as_tagged_json() {
        let cmd = RenderCommand::PushTransform {
            translate: Point::new(-80.0, 0.0),
            scale: Point::new(1.8, 1.0),
        };
        let json = serde_json::to_string(&cmd).expect("serialize");
        assert!(json.starts_with(r#"{"PushTransform""#));
        let back: RenderCommand = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, cmd);
    }

    #[test]
    fn unit_variants_serialize_as_strings() {
        let json = serde_json::to_string(&RenderCommand::EndGroup).expect("serialize");
        assert_eq!(json, r#""EndGroup""#);
    }
}
