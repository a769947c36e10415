//! Starmap - interactive constellation viewer
//!
//! Renders the Aquarius star field with hover legends, a fixed
//! constellation skeleton, and glow links from the pointer to its nearest
//! stars. Runs in the browser (`--features wasm`) and as a native window
//! (`--features viewer`).

pub mod core;
pub mod time;

#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "gui")]
pub mod theme;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
use wasm_bindgen::prelude::*;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
#[wasm_bindgen(start)]
pub fn start() {
    use tracing::warn;
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();

    // Initialize tracing for browser console
    tracing_wasm::set_as_global_default();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let canvas = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document")
            .get_element_by_id("canvas")
            .expect("no canvas element")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("not a canvas element");

        let records = core::load_bundled().unwrap_or_else(|e| {
            warn!(error = %e, "star data failed to load; sky stays empty");
            Vec::new()
        });

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(app::StarMapApp::new(cc, records)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}
