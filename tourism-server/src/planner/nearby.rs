//! Proximity search: attractions near a route.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::AttractionCatalog;
use crate::domain::{AnnotatedPointOfInterest, Coordinate};
use crate::geo::{distance, round_to};

/// How an attraction near several waypoints gets its `distance_from_route`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupMode {
    /// Keep the distance from the first waypoint that found the attraction,
    /// even if a later waypoint is closer. Compatible with existing clients.
    #[default]
    FirstMatch,

    /// Keep the smallest distance over all waypoints. Corrected behaviour,
    /// opt-in.
    ClosestMatch,
}

/// Find catalog attractions within `radius_km` of any waypoint.
///
/// Waypoints are scanned in order and, for each, the catalog in catalog
/// order. An attraction qualifies when its distance to the waypoint is at
/// most `radius_km` and, if `interests` is non-empty, it shares at least one
/// tag with `interests`. Each attraction appears once (by id); see
/// [`DedupMode`] for which distance it keeps.
///
/// The result is sorted by `distance_from_route` (rounded to 2 decimals),
/// ascending. The sort is stable, so ties keep discovery order.
///
/// Empty waypoints or a negative radius give an empty result. A radius of
/// zero only matches attractions exactly on a waypoint.
pub fn find_nearby<C, S>(
    catalog: &C,
    waypoints: &[Coordinate],
    radius_km: f64,
    interests: &[S],
    mode: DedupMode,
) -> Vec<AnnotatedPointOfInterest>
where
    C: AttractionCatalog + ?Sized,
    S: AsRef<str>,
{
    let points = catalog.list_all();

    // (catalog index, raw distance), in discovery order
    let mut found: Vec<(usize, f64)> = Vec::new();
    let mut position_by_id: HashMap<&str, usize> = HashMap::new();

    for waypoint in waypoints {
        for (idx, point) in points.iter().enumerate() {
            let d = distance(*waypoint, point.coordinates);

            // Written so that NaN distances never qualify
            if !(d <= radius_km) {
                continue;
            }

            if !interests.is_empty() && !point.matches_any_interest(interests) {
                continue;
            }

            match position_by_id.get(point.id.as_str()) {
                None => {
                    position_by_id.insert(point.id.as_str(), found.len());
                    found.push((idx, d));
                }
                Some(&pos) => {
                    if mode == DedupMode::ClosestMatch && d < found[pos].1 {
                        found[pos].1 = d;
                    }
                }
            }
        }
    }

    let mut nearby: Vec<AnnotatedPointOfInterest> = found
        .into_iter()
        .map(|(idx, d)| points[idx].annotate(round_to(d, 2)))
        .collect();

    nearby.sort_by(|a, b| a.distance_from_route.total_cmp(&b.distance_from_route));
    nearby
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::PointOfInterest;
    use proptest::prelude::*;
    use std::collections::HashSet;

    const TAGS: [&str; 4] = ["Adventure", "Culture", "Relaxation", "Spirituality"];

    fn arb_coordinate() -> impl Strategy<Value = Coordinate> {
        (23.0f64..23.5, 85.0f64..85.5).prop_map(|(lat, lng)| Coordinate::new(lat, lng))
    }

    fn arb_catalog() -> impl Strategy<Value = Vec<PointOfInterest>> {
        prop::collection::vec(
            (arb_coordinate(), prop::sample::subsequence(TAGS.to_vec(), 0..=2)),
            0..25,
        )
        .prop_map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (coordinates, tags))| PointOfInterest {
                    id: format!("poi_{i}"),
                    name: format!("Place {i}"),
                    city: "Testpur".to_string(),
                    coordinates,
                    category: "test".to_string(),
                    interest_tags: tags.into_iter().map(String::from).collect(),
                    description: String::new(),
                    best_time: String::new(),
                    duration: String::new(),
                    image: String::new(),
                    group_size: None,
                    price: None,
                })
                .collect()
        })
    }

    fn arb_mode() -> impl Strategy<Value = DedupMode> {
        prop_oneof![Just(DedupMode::FirstMatch), Just(DedupMode::ClosestMatch)]
    }

    proptest! {
        #[test]
        fn results_are_unique_sorted_and_within_radius(
            catalog in arb_catalog(),
            waypoints in prop::collection::vec(arb_coordinate(), 0..8),
            radius in 0.0f64..30.0,
            mode in arb_mode(),
        ) {
            let results = find_nearby(&catalog, &waypoints, radius, &[] as &[&str], mode);

            let unique: HashSet<_> = results.iter().map(|r| r.point.id.clone()).collect();
            prop_assert_eq!(unique.len(), results.len());

            for pair in results.windows(2) {
                prop_assert!(pair[0].distance_from_route <= pair[1].distance_from_route);
            }

            for r in &results {
                let closest = waypoints
                    .iter()
                    .map(|w| distance(*w, r.point.coordinates))
                    .fold(f64::INFINITY, f64::min);
                prop_assert!(closest <= radius);
                prop_assert!(r.distance_from_route >= round_to(closest, 2));
            }
        }

        #[test]
        fn interest_filter_never_leaks(
            catalog in arb_catalog(),
            waypoints in prop::collection::vec(arb_coordinate(), 1..6),
            radius in 0.0f64..60.0,
        ) {
            let results = find_nearby(&catalog, &waypoints, radius, &["Adventure"], DedupMode::FirstMatch);
            for r in &results {
                prop_assert!(r.point.interest_tags.iter().any(|t| t == "Adventure"));
            }
        }

        #[test]
        fn closest_match_never_exceeds_first_match(
            catalog in arb_catalog(),
            waypoints in prop::collection::vec(arb_coordinate(), 1..6),
            radius in 0.0f64..30.0,
        ) {
            let first = find_nearby(&catalog, &waypoints, radius, &[] as &[&str], DedupMode::FirstMatch);
            let closest = find_nearby(&catalog, &waypoints, radius, &[] as &[&str], DedupMode::ClosestMatch);
            prop_assert_eq!(first.len(), closest.len());

            for c in &closest {
                let f = first.iter().find(|f| f.point.id == c.point.id).unwrap();
                prop_assert!(c.distance_from_route <= f.distance_from_route);
            }
        }
    }
}
