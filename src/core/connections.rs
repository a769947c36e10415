//! The fixed constellation skeleton
//!
//! Author-defined edges between stars, matched by id. The table is part of
//! the build, not the dataset.

use tracing::warn;

use super::data::{ScreenPoint, StarField};

/// Star-to-star edges forming the Aquarius skeleton. Ids are matched
/// case-insensitively against the loaded dataset.
pub const NAMED_CONNECTIONS: &[(&str, &str)] = &[
    ("sadalmelik", "star1"),
    ("sadalmelik", "sadalsuud"),
    ("sadalmelik", "star2"),
    ("star1", "sadachbia"),
    ("star2", "star3"),
    ("sadalsuud", "albali"),
    ("sadachbia", "sadaltager"),
    ("sadaltager", "star4"),
    ("star4", "star5"),
    ("star5", "star6"),
    ("star6", "skat"),
];

/// Resolve the built-in skeleton to pairs of screen centers.
pub fn resolve_named(field: &StarField) -> Vec<(ScreenPoint, ScreenPoint)> {
    resolve_pairs(field, NAMED_CONNECTIONS)
}

/// Resolve id pairs against the field, case-insensitively.
///
/// A pair referencing an unknown id is skipped with a diagnostic; the rest
/// of the skeleton still draws.
pub fn resolve_pairs(
    field: &StarField,
    pairs: &[(&str, &str)],
) -> Vec<(ScreenPoint, ScreenPoint)> {
    pairs
        .iter()
        .filter_map(
            |&(id_a, id_b)| match (field.find_by_id(id_a), field.find_by_id(id_b)) {
                (Some(a), Some(b)) => Some((a.center, b.center)),
                _ => {
                    warn!(id_a, id_b, "named connection references unknown star");
                    None
                }
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::StarRecord;

    fn field_of(records: Vec<(f32, f32, &str, &str)>) -> StarField {
        let records = records
            .into_iter()
            .map(|(x, y, id, name)| StarRecord {
                x,
                y,
                id: id.to_string(),
                name: name.to_string(),
                legend: name.to_string(),
            })
            .collect();

        let mut field = StarField::new();
        field.populate(records, |_| 0.0);
        field.set_viewport(100.0, 100.0);
        field
    }

    #[test]
    fn resolves_ids_case_insensitively() {
        let field = field_of(vec![
            (10.0, 10.0, "Sadalmelik", "Sadalmelik"),
            (90.0, 90.0, "SKAT", "Skat"),
        ]);

        let lower = resolve_pairs(&field, &[("sadalmelik", "skat")]);
        let mixed = resolve_pairs(&field, &[("SaDaLmElIk", "Skat")]);

        assert_eq!(lower.len(), 1);
        // Same edge regardless of the input case of either endpoint.
        assert_eq!(lower, mixed);
        assert_eq!(lower[0].0, ScreenPoint::new(10.0, 10.0));
        assert_eq!(lower[0].1, ScreenPoint::new(90.0, 90.0));
    }

    #[test]
    fn unknown_endpoint_skips_pair_only() {
        let field = field_of(vec![
            (10.0, 10.0, "a", "Alpha"),
            (90.0, 90.0, "b", "Beta"),
        ]);

        let edges = resolve_pairs(&field, &[("a", "missing"), ("a", "b"), ("missing", "b")]);
        assert_eq!(edges.len(), 1);
    }

    #[test]
    fn placeholders_are_valid_endpoints() {
        // Unnamed shape stars are still connection anchors.
        let field = field_of(vec![(20.0, 20.0, "star1", ""), (60.0, 60.0, "star2", "")]);

        let edges = resolve_pairs(&field, &[("star1", "star2")]);
        assert_eq!(edges.len(), 1);
    }

    #[test]
    fn empty_field_resolves_nothing() {
        let field = StarField::new();
        assert!(resolve_named(&field).is_empty());
    }
}
