//! Platform-agnostic star-map core - shared between the viewer and the
//! headless dataset check

pub mod connections;
pub mod data;
pub mod input;
pub mod loader;
pub mod nearest;

pub use connections::{resolve_named, resolve_pairs, NAMED_CONNECTIONS};
pub use data::{ScreenPoint, StarField, StarInfo, StarRecord};
pub use input::{KeyBuffer, TRIGGER_SEQUENCE, TRIGGER_URL};
pub use loader::{load_bundled, parse_records, LoadError, BUNDLED_STARS};
pub use nearest::{nearest_stars, PROXIMITY_COUNT};
