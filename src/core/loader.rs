//! Dataset loading
//!
//! The dataset is a JSON array of star records, embedded into the binary so
//! the web build needs no fetch. The native viewer can point elsewhere via
//! the `STARMAP_DATA` env var.

use thiserror::Error;
use tracing::debug;

use super::data::StarRecord;

/// Star dataset shipped with the crate.
pub const BUNDLED_STARS: &str = include_str!("../../data/stars.json");

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read star data: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse star data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a JSON array of star records, preserving source order.
pub fn parse_records(json: &str) -> Result<Vec<StarRecord>, LoadError> {
    let records: Vec<StarRecord> = serde_json::from_str(json)?;
    debug!(count = records.len(), "star records parsed");
    Ok(records)
}

/// The dataset bundled into the binary.
pub fn load_bundled() -> Result<Vec<StarRecord>, LoadError> {
    parse_records(BUNDLED_STARS)
}

/// Read a dataset from disk (native override).
#[cfg(not(target_arch = "wasm32"))]
pub fn load_from_path(path: &std::path::Path) -> Result<Vec<StarRecord>, LoadError> {
    let json = std::fs::read_to_string(path)?;
    parse_records(&json)
}
