//! Star-map application shell
//!
//! Runs on both native and WASM. All state lives here and is only touched
//! from the egui update loop, so there is nothing to lock.

mod lines;
mod markers;

use eframe::egui;
use rand::Rng;
use tracing::info;

use crate::core::{KeyBuffer, StarField, StarRecord, TRIGGER_URL};
use crate::theme::{colors, night_visuals};

/// The star-map application.
///
/// Each frame redraws the whole overlay: skeleton first, proximity links,
/// then markers and the tooltip on top. Immediate mode subsumes the
/// clear-on-pointer-move dance a retained canvas would need.
pub struct StarMapApp {
    /// All loaded stars plus the interactive subset.
    field: StarField,
    /// Rolling keystroke window for the hidden trigger.
    keys: KeyBuffer,
}

impl StarMapApp {
    pub fn new(cc: &eframe::CreationContext<'_>, records: Vec<StarRecord>) -> Self {
        cc.egui_ctx.set_visuals(night_visuals());

        info!(records = records.len(), "populating star field");

        let mut rng = rand::thread_rng();
        let mut field = StarField::new();
        field.populate(records, |_| rng.gen_range(0.0..2.0));

        Self {
            field,
            keys: KeyBuffer::new(),
        }
    }

    /// Re-project star centers when the viewport dimensions change.
    fn track_viewport(&mut self, ctx: &egui::Context) {
        let rect = ctx.screen_rect();
        if self.field.viewport() != (rect.width(), rect.height()) {
            self.field.set_viewport(rect.width(), rect.height());
        }
    }

    /// Feed typed characters into the trigger buffer; navigate on a match.
    fn handle_keys(&mut self, ctx: &egui::Context) {
        let typed: Vec<String> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Text(text) => Some(text.clone()),
                    _ => None,
                })
                .collect()
        });

        for text in typed {
            if self.keys.push(&text) {
                ctx.open_url(egui::OpenUrl::same_tab(TRIGGER_URL));
            }
        }
    }
}

impl eframe::App for StarMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Twinkle runs continuously.
        ctx.request_repaint();

        self.track_viewport(ctx);
        self.handle_keys(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BG_SKY))
            .show(ctx, |ui| {
                let pointer = ui.input(|i| i.pointer.hover_pos());

                lines::draw_named(ui.painter(), &self.field);
                if let Some(pos) = pointer {
                    lines::draw_proximity(ui.painter(), &self.field, pos);
                }

                if let Some(idx) = markers::draw_markers(ui, &self.field, pointer) {
                    markers::draw_tooltip(ui.ctx(), &self.field.stars()[idx]);
                }
            });
    }
}
