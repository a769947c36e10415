//! Native star-map viewer
//!
//! Run with: cargo run --bin starmap --features viewer
//! Headless dataset check: cargo run --bin starmap --features viewer -- --check

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use starmap_vis::app::StarMapApp;
    use starmap_vis::core::{loader, StarRecord};
    use tracing::{error, info, warn};
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,starmap_vis=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let loaded: Result<Vec<StarRecord>, loader::LoadError> = match std::env::var("STARMAP_DATA") {
        Ok(path) => {
            info!(path = %path, "loading star data from file");
            loader::load_from_path(std::path::Path::new(&path))
        }
        Err(_) => loader::load_bundled(),
    };

    if std::env::args().any(|arg| arg == "--check") {
        let records = match loaded {
            Ok(records) => records,
            Err(e) => {
                error!(error = %e, "star data failed to load");
                std::process::exit(1);
            }
        };
        check_dataset(records);
        return Ok(());
    }

    // The viewer starts either way; a failed load just leaves the sky empty.
    let records = loaded.unwrap_or_else(|e| {
        warn!(error = %e, "star data failed to load; sky stays empty");
        Vec::new()
    });

    info!(stars = records.len(), "starting viewer");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Starmap")
            .with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Starmap",
        options,
        Box::new(|cc| Ok(Box::new(StarMapApp::new(cc, records)))),
    )
}

/// Validate the dataset the way the viewer would consume it and report
/// counts for stars, placeholders, and skeleton resolution.
#[cfg(not(target_arch = "wasm32"))]
fn check_dataset(records: Vec<starmap_vis::core::StarRecord>) {
    use starmap_vis::core::{resolve_named, StarField, NAMED_CONNECTIONS};
    use tracing::{info, warn};

    let total = records.len();
    let mut field = StarField::new();
    field.populate(records, |_| 0.0);
    field.set_viewport(100.0, 100.0);

    let resolved = resolve_named(&field).len();
    if resolved < NAMED_CONNECTIONS.len() {
        warn!(
            unresolved = NAMED_CONNECTIONS.len() - resolved,
            "skeleton has unresolved connections"
        );
    }

    info!(
        stars = total,
        interactive = field.interactive_count(),
        placeholders = total - field.interactive_count(),
        connections = NAMED_CONNECTIONS.len(),
        resolved,
        "dataset check complete"
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {}
