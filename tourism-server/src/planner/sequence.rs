//! Greedy nearest-neighbour visiting order.

use crate::domain::{Coordinate, Located};
use crate::geo::distance;

/// Order `points` by repeatedly visiting the closest unvisited one.
///
/// Starts at `start`; after each visit the current position moves to the
/// visited point. Ties go to the point that came first in the input. The
/// result is a permutation of the input.
///
/// This is a heuristic: it is O(n²) and does not guarantee the shortest total
/// distance, which is fine for the handful of stops in a day trip.
///
/// ```
/// use tourism_server::domain::Coordinate;
/// use tourism_server::planner::nearest_neighbor_order;
///
/// let start = Coordinate::new(23.0, 85.0);
/// let far = Coordinate::new(23.5, 85.0);
/// let near = Coordinate::new(23.1, 85.0);
///
/// assert_eq!(nearest_neighbor_order(vec![far, near], start), vec![near, far]);
/// ```
pub fn nearest_neighbor_order<T: Located>(points: Vec<T>, start: Coordinate) -> Vec<T> {
    let mut remaining = points;
    let mut ordered = Vec::with_capacity(remaining.len());
    let mut current = start;

    while !remaining.is_empty() {
        let mut best_idx = 0;
        let mut best_distance = distance(current, remaining[0].location());

        for (idx, point) in remaining.iter().enumerate().skip(1) {
            let d = distance(current, point.location());
            if d < best_distance {
                best_idx = idx;
                best_distance = d;
            }
        }

        // `remove` keeps the relative order of the rest, so ties stay stable
        let next = remaining.remove(best_idx);
        current = next.location();
        ordered.push(next);
    }

    ordered
}
