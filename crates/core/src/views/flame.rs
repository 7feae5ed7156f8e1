use flame_view_protocol::{Point, RenderCommand, TextAlign, ThemeToken};

use crate::layout::LabelLayout;
use crate::model::Frame;
use crate::transform::Transform;

/// Render frames as a flame graph: a rect layer drawn in content
/// coordinates under the zoom transform, then a text layer of fitted labels
/// in screen coordinates.
pub fn render_flame(
    frames: &[Frame],
    transform: &Transform,
    clip_width: f64,
    labels: &LabelLayout,
) -> Vec<RenderCommand> {
    if frames.is_empty() {
        return Vec::new();
    }

    let placed = labels.layout(frames, transform, clip_width);
    let mut commands = Vec::with_capacity(frames.len() + placed.len() + 6);

    commands.push(RenderCommand::BeginGroup {
        id: "rect-layer".to_string(),
        label: None,
    });
    commands.push(RenderCommand::PushTransform {
        translate: Point::new(transform.matrix_offset_x(), 0.0),
        scale: Point::new(transform.scale_x, 1.0),
    });

    for (index, frame) in frames.iter().enumerate() {
        commands.push(RenderCommand::DrawRect {
            rect: frame.rect(),
            color: color_for_category(&frame.color_id),
            border_color: Some(ThemeToken::Border),
            color_id: Some(frame.color_id.clone()),
            frame_id: Some(index as u64),
        });
    }

    commands.push(RenderCommand::PopTransform);
    commands.push(RenderCommand::EndGroup);

    commands.push(RenderCommand::BeginGroup {
        id: "text-layer".to_string(),
        label: None,
    });
    for label in placed {
        commands.push(RenderCommand::DrawText {
            position: label.position,
            text: label.text,
            color: ThemeToken::TextPrimary,
            font_size: labels.font_size,
            align: TextAlign::Left,
            frame_id: Some(label.frame_index as u64),
        });
    }
    commands.push(RenderCommand::EndGroup);

    commands
}

/// Stable palette slot for a category id (FNV-1a).
fn color_for_category(color_id: &str) -> ThemeToken {
    let hash = color_id
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325_u64, |h, b| {
            (h ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
        });
    let palette = ThemeToken::FLAME_PALETTE;
    palette[(hash % palette.len() as u64) as usize]
}
