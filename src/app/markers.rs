//! Star markers, twinkle, and the hover tooltip

use eframe::egui::{self, Color32, Pos2, RichText};

use crate::core::{ScreenPoint, StarField, StarInfo};
use crate::theme::colors;
use crate::time::{now_seconds, twinkle_brightness};

/// Marker radius in logical pixels.
const STAR_RADIUS: f32 = 2.5;

/// Pointer distance within which a marker counts as hovered.
const HIT_RADIUS: f32 = 8.0;

/// Tooltip offset from the marker's right and top edges.
const TOOLTIP_GAP: egui::Vec2 = egui::vec2(10.0, -5.0);

/// Draw every marker and return the index of the interactive star under the
/// pointer, if any. Nearest wins when hit circles overlap.
pub(super) fn draw_markers(
    ui: &egui::Ui,
    field: &StarField,
    pointer: Option<Pos2>,
) -> Option<usize> {
    let painter = ui.painter();
    let now = now_seconds();

    for star in field.stars() {
        let pos = Pos2::new(star.center.x, star.center.y);
        let alpha = (twinkle_brightness(now, star.twinkle_delay) * 255.0) as u8;

        // Faint halo under the core dot.
        painter.circle_filled(
            pos,
            STAR_RADIUS * 2.0,
            Color32::from_rgba_unmultiplied(255, 255, 255, alpha / 6),
        );
        painter.circle_filled(
            pos,
            STAR_RADIUS,
            Color32::from_rgba_unmultiplied(255, 255, 255, alpha),
        );
    }

    let hovered = pointer.and_then(|p| {
        let p = ScreenPoint::new(p.x, p.y);
        field
            .interactive()
            .filter_map(|(idx, star)| {
                let dist = star.center.distance(p);
                (dist <= HIT_RADIUS).then_some((idx, dist))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(idx, _)| idx)
    });

    if hovered.is_some() {
        ui.output_mut(|out| out.cursor_icon = egui::CursorIcon::PointingHand);
    }

    hovered
}

/// Floating label anchored beside a hovered star: name in bold, legend
/// beneath it.
pub(super) fn draw_tooltip(ctx: &egui::Context, star: &StarInfo) {
    let anchor = Pos2::new(
        star.center.x + STAR_RADIUS + TOOLTIP_GAP.x,
        star.center.y - STAR_RADIUS + TOOLTIP_GAP.y,
    );

    egui::Area::new(egui::Id::new("star_tooltip"))
        .order(egui::Order::Tooltip)
        .fixed_pos(anchor)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(colors::BG_TOOLTIP)
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(&star.record.name)
                            .color(colors::TEXT_PRIMARY)
                            .strong(),
                    );
                    ui.label(
                        RichText::new(&star.record.legend)
                            .color(colors::TEXT_SECONDARY)
                            .size(11.0),
                    );
                });
        });
}
