//! Tour fitness evaluation.
//!
//! A route is a permutation of waypoint ids interpreted as a closed
//! cycle: the last waypoint connects back to the first. Fitness is the
//! total cyclic travel distance — lower is better.

use crate::cost::CostTable;
use crate::error::Result;

/// Total cyclic tour length of `route` over `table`.
///
/// Sums `distance(route[i - 1], route[i])` for every position, with the
/// index wrapping so the edge from the last waypoint back to the first
/// (the closing edge of the cycle) is included. Pure function: no side
/// effects, same route always yields the same cost.
///
/// Routes of length 0 or 1 have no edges and cost `0.0`.
///
/// # Errors
///
/// Propagates [`Error::MissingPair`](crate::Error::MissingPair) if any
/// adjacent pair is absent from the table.
pub fn tour_cost(route: &[usize], table: &CostTable) -> Result<f64> {
    if route.len() < 2 {
        return Ok(0.0);
    }
    let mut total = 0.0;
    let mut prev = route[route.len() - 1];
    for &stop in route {
        total += table.distance(prev, stop)?;
        prev = stop;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::CostRow;
    use crate::error::Error;

    fn row(a: &str, b: &str, distance: f64) -> CostRow {
        CostRow {
            waypoint1: a.into(),
            waypoint2: b.into(),
            distance_m: distance,
            duration_s: distance,
        }
    }

    /// Unit ring over A-B-C-D with expensive diagonals.
    fn ring_table() -> CostTable {
        CostTable::build([
            row("A", "B", 1.0),
            row("B", "C", 1.0),
            row("C", "D", 1.0),
            row("D", "A", 1.0),
            row("A", "C", 10.0),
            row("B", "D", 10.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_ring_tour_cost() {
        let table = ring_table();
        // A → B → C → D → back to A
        assert_eq!(tour_cost(&[0, 1, 2, 3], &table).unwrap(), 4.0);
        // A → C → B → D → back to A crosses both diagonals
        assert_eq!(tour_cost(&[0, 2, 1, 3], &table).unwrap(), 22.0);
    }

    #[test]
    fn test_rotation_invariance() {
        let table = ring_table();
        let route = [0, 2, 1, 3];
        let reference = tour_cost(&route, &table).unwrap();
        for offset in 1..route.len() {
            let mut rotated = route.to_vec();
            rotated.rotate_left(offset);
            assert_eq!(
                tour_cost(&rotated, &table).unwrap(),
                reference,
                "rotation by {offset} changed the cycle cost"
            );
        }
    }

    #[test]
    fn test_reversal_invariance() {
        // The table is symmetric, so traversing the cycle backwards
        // costs the same.
        let table = ring_table();
        let route = [0, 2, 1, 3];
        let mut reversed = route.to_vec();
        reversed.reverse();
        assert_eq!(
            tour_cost(&route, &table).unwrap(),
            tour_cost(&reversed, &table).unwrap()
        );
    }

    #[test]
    fn test_two_waypoint_route_is_there_and_back() {
        let table = CostTable::build([row("A", "B", 7.5)]).unwrap();
        assert_eq!(tour_cost(&[0, 1], &table).unwrap(), 15.0);
    }

    #[test]
    fn test_degenerate_routes_cost_zero() {
        let table = ring_table();
        assert_eq!(tour_cost(&[], &table).unwrap(), 0.0);
        assert_eq!(tour_cost(&[2], &table).unwrap(), 0.0);
    }

    #[test]
    fn test_missing_pair_propagates() {
        let table = CostTable::build([row("A", "B", 1.0), row("C", "D", 1.0)]).unwrap();
        let err = tour_cost(&[0, 1, 2, 3], &table).unwrap_err();
        assert!(matches!(err, Error::MissingPair { .. }), "got {err:?}");
    }
}
