//! Star dataset and screen-space projection
//!
//! These structures are platform-agnostic (no GUI deps) and shared
//! between the viewer and the headless dataset check.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::{debug, trace, warn};

/// One star as it appears in the bundled dataset.
///
/// `x` and `y` are percentages of the viewport (0-100). A record whose
/// `name` and `legend` are both empty is a placeholder: it is rendered but
/// excluded from every interactive behavior.
#[derive(Clone, Debug, Deserialize)]
pub struct StarRecord {
    pub x: f32,
    pub y: f32,
    pub id: String,
    pub name: String,
    pub legend: String,
}

impl StarRecord {
    /// Placeholders fill out the constellation shape but carry no label.
    pub fn is_placeholder(&self) -> bool {
        self.name.is_empty() && self.legend.is_empty()
    }
}

/// A point in screen space (logical pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: ScreenPoint) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A loaded star bound to its render state.
///
/// Created once at populate time and never mutated afterwards, except for
/// `center`, which is recomputed whenever the viewport changes.
#[derive(Clone, Debug)]
pub struct StarInfo {
    pub record: StarRecord,
    pub placeholder: bool,
    /// Twinkle start offset in seconds, uniform in `[0, 2)`.
    pub twinkle_delay: f32,
    /// Cached screen-space center for the current viewport.
    pub center: ScreenPoint,
}

/// All loaded stars plus the interactive (non-placeholder) subset.
///
/// Owned by the app and passed by reference to handlers. Insertion order is
/// load order; stars are never reordered or removed.
pub struct StarField {
    stars: Vec<StarInfo>,
    /// Indices into `stars` for the non-placeholder subset, insertion order.
    interactive: Vec<usize>,
    viewport: (f32, f32),
}

impl StarField {
    pub fn new() -> Self {
        Self {
            stars: Vec::new(),
            interactive: Vec::new(),
            viewport: (0.0, 0.0),
        }
    }

    /// Load records in source order, assigning each a twinkle offset.
    ///
    /// One marker per record. Duplicate non-placeholder ids are kept but
    /// logged: connection lookup resolves to the first match.
    pub fn populate<F>(&mut self, records: Vec<StarRecord>, mut twinkle_delay: F)
    where
        F: FnMut(&StarRecord) -> f32,
    {
        let mut seen: HashSet<String> = HashSet::new();
        for record in records {
            let placeholder = record.is_placeholder();
            if !placeholder && !seen.insert(record.id.to_lowercase()) {
                warn!(id = %record.id, "duplicate star id in dataset");
            }

            let delay = twinkle_delay(&record);
            let center = Self::project(&record, self.viewport);
            let idx = self.stars.len();
            if !placeholder {
                self.interactive.push(idx);
            }

            trace!(id = %record.id, placeholder, "star registered");
            self.stars.push(StarInfo {
                record,
                placeholder,
                twinkle_delay: delay,
                center,
            });
        }

        debug!(
            stars = self.stars.len(),
            interactive = self.interactive.len(),
            "star field populated"
        );
    }

    /// Recompute every cached center for new viewport dimensions.
    ///
    /// Prior centers are invalid after a resize; redrawing is the caller's
    /// responsibility.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
        for star in &mut self.stars {
            star.center = Self::project(&star.record, self.viewport);
        }
        debug!(width, height, stars = self.stars.len(), "viewport updated");
    }

    pub fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    fn project(record: &StarRecord, (width, height): (f32, f32)) -> ScreenPoint {
        ScreenPoint::new(record.x / 100.0 * width, record.y / 100.0 * height)
    }

    /// All stars in load order, placeholders included.
    pub fn stars(&self) -> &[StarInfo] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Interactive stars with their indices into [`stars`](Self::stars).
    pub fn interactive(&self) -> impl Iterator<Item = (usize, &StarInfo)> {
        self.interactive.iter().map(|&idx| (idx, &self.stars[idx]))
    }

    pub fn interactive_count(&self) -> usize {
        self.interactive.len()
    }

    /// Case-insensitive id lookup over all stars, placeholders included.
    ///
    /// Linear scan; fine at a few dozen stars, swap for a normalized key map
    /// if the dataset ever grows.
    pub fn find_by_id(&self, id: &str) -> Option<&StarInfo> {
        self.stars
            .iter()
            .find(|star| star.record.id.eq_ignore_ascii_case(id))
    }
}

impl Default for StarField {
    fn default() -> Self {
        Self::new()
    }
}
