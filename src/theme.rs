//! Night-sky theme for the star map

use egui::Color32;

/// Dark sky palette. Marker and line tones are white at varying alpha so
/// overlapping strokes brighten naturally.
pub mod colors {
    use super::Color32;

    // === Sky ===
    pub const BG_SKY: Color32 = Color32::from_rgb(4, 8, 20);          // #040814 - near-black blue
    pub const BG_TOOLTIP: Color32 = Color32::from_rgb(13, 18, 38);    // #0D1226 - raised panel

    // === Text ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 244, 255);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(152, 162, 190);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(72, 80, 104);

    // === Borders ===
    pub const BORDER: Color32 = Color32::from_rgb(42, 50, 74);

    // === Connection lines ===
    // Premultiplied white: (a, a, a, a) is white at alpha a.
    /// Skeleton stroke, white at 40%.
    pub const NAMED_LINE: Color32 = Color32::from_rgba_premultiplied(102, 102, 102, 102);
    /// Proximity stroke core, white at 20%.
    pub const PROXIMITY_LINE: Color32 = Color32::from_rgba_premultiplied(51, 51, 51, 51);
}

/// Egui visuals matching the night-sky palette.
pub fn night_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_SKY;
    visuals.window_fill = BG_TOOLTIP;
    visuals.extreme_bg_color = BG_SKY;
    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.noninteractive.bg_fill = BG_SKY;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}
