//! Pointer-proximity search over the star field

use super::data::{ScreenPoint, StarField, StarInfo};

/// Number of proximity links drawn from the pointer.
pub const PROXIMITY_COUNT: usize = 3;

/// The `k` interactive stars closest to `point`, ascending by distance.
///
/// Full scan and re-sort on every call; acceptable at a few dozen stars.
/// Anything larger wants throttling and a spatial index first.
pub fn nearest_stars(field: &StarField, point: ScreenPoint, k: usize) -> Vec<&StarInfo> {
    let mut ranked: Vec<(f32, &StarInfo)> = field
        .interactive()
        .map(|(_, star)| (star.center.distance(point), star))
        .collect();

    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
    ranked.truncate(k);
    ranked.into_iter().map(|(_, star)| star).collect()
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
                legend: if name.is_empty() {
                    String::new()
                } else {
                    format!("legend of {name}")
                },
            })
            .collect();

        let mut field = StarField::new();
        field.populate(records, |_| 0.0);
        // 100x100 viewport makes percent coords equal screen coords.
        field.set_viewport(100.0, 100.0);
        field
    }

    #[test]
    fn returns_ascending_by_distance() {
        let field = field_of(vec![
            (50.0, 50.0, "far", "Far"),
            (10.0, 10.0, "near", "Near"),
            (30.0, 30.0, "mid", "Mid"),
        ]);

        let hits = nearest_stars(&field, ScreenPoint::new(0.0, 0.0), 3);
        let ids: Vec<&str> = hits.iter().map(|s| s.record.id.as_str()).collect();
        assert_eq!(ids, ["near", "mid", "far"]);
    }

    #[test]
    fn caps_results_at_k() {
        let field = field_of(vec![
            (10.0, 10.0, "a", "A"),
            (20.0, 20.0, "b", "B"),
            (30.0, 30.0, "c", "C"),
            (40.0, 40.0, "d", "D"),
        ]);

        let hits = nearest_stars(&field, ScreenPoint::new(0.0, 0.0), 2);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].record.id, "a");
        assert_eq!(hits[1].record.id, "b");
    }

    #[test]
    fn returns_all_when_population_is_smaller_than_k() {
        // Spec'd worked example: one named star, one placeholder.
        let field = field_of(vec![(10.0, 10.0, "a", "Alpha"), (90.0, 90.0, "b", "")]);

        let hits = nearest_stars(&field, ScreenPoint::new(0.0, 0.0), 3);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].record.id, "a");
    }

    #[test]
    fn empty_when_no_eligible_stars() {
        let field = field_of(vec![(10.0, 10.0, "a", ""), (90.0, 90.0, "b", "")]);
        assert!(nearest_stars(&field, ScreenPoint::new(50.0, 50.0), 3).is_empty());

        let empty = StarField::new();
        assert!(nearest_stars(&empty, ScreenPoint::new(0.0, 0.0), 3).is_empty());
    }

    #[test]
    fn placeholders_never_rank() {
        // The placeholder sits right on the query point but must not appear.
        let field = field_of(vec![(0.0, 0.0, "ghost", ""), (40.0, 40.0, "a", "Alpha")]);

        let hits = nearest_stars(&field, ScreenPoint::new(0.0, 0.0), 3);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].record.id, "a");
    }
}
