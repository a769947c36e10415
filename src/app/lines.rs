//! Connection overlay: constellation skeleton and pointer-proximity links

use eframe::egui::{Color32, Painter, Pos2, Stroke};

use crate::core::{nearest_stars, resolve_named, ScreenPoint, StarField, PROXIMITY_COUNT};
use crate::theme::colors;

/// Skeleton stroke width.
const NAMED_WIDTH: f32 = 1.0;

/// Proximity line core width.
const PROXIMITY_WIDTH: f32 = 1.5;

/// Wide-to-narrow halo passes under the core stroke, approximating a canvas
/// shadow-blur glow.
const GLOW_PASSES: &[(f32, u8)] = &[(5.0, 14), (3.0, 28)];

/// Draw the fixed constellation skeleton.
pub(super) fn draw_named(painter: &Painter, field: &StarField) {
    for (a, b) in resolve_named(field) {
        painter.line_segment(
            [to_pos(a), to_pos(b)],
            Stroke::new(NAMED_WIDTH, colors::NAMED_LINE),
        );
    }
}

/// Draw glow lines from the pointer to its nearest interactive stars.
///
/// With zero eligible stars nothing is drawn beyond the skeleton.
pub(super) fn draw_proximity(painter: &Painter, field: &StarField, pointer: Pos2) {
    let origin = ScreenPoint::new(pointer.x, pointer.y);
    for star in nearest_stars(field, origin, PROXIMITY_COUNT) {
        let segment = [pointer, to_pos(star.center)];
        for &(width, alpha) in GLOW_PASSES {
            painter.line_segment(
                segment,
                Stroke::new(width, Color32::from_rgba_unmultiplied(255, 255, 255, alpha)),
            );
        }
        painter.line_segment(segment, Stroke::new(PROXIMITY_WIDTH, colors::PROXIMITY_LINE));
    }
}

fn to_pos(point: ScreenPoint) -> Pos2 {
    Pos2::new(point.x, point.y)
}
