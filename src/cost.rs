//! Symmetric pairwise travel-cost table.
//!
//! [`CostTable`] is the read-only input of the whole search: an immutable
//! mapping from unordered waypoint pairs to travel distance and duration.
//! Waypoint labels are opaque strings; the table interns each distinct
//! label to a dense `usize` id at build time, and everything downstream
//! (routes, operators, fitness) works on id permutations.
//!
//! The table is built once and never mutated afterwards, so a shared
//! `&CostTable` is safe to read from any number of threads.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// One stored unordered pair, in the tabular interchange shape used by
/// the persistence collaborator.
///
/// `waypoint1`/`waypoint2` ordering carries no meaning; lookups are
/// symmetric.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostRow {
    pub waypoint1: String,
    pub waypoint2: String,
    /// Travel distance in meters. Must be non-negative and finite.
    pub distance_m: f64,
    /// Travel duration in seconds. Must be non-negative and finite.
    pub duration_s: f64,
}

/// Travel cost of a single unordered waypoint pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairCost {
    pub distance_m: f64,
    pub duration_s: f64,
}

/// Immutable symmetric map from unordered waypoint pairs to travel costs.
///
/// Every pair of distinct waypoints that can appear adjacent in a
/// candidate route must have an entry; a missing pair is a fatal
/// [`Error::MissingPair`] at evaluation time, never a default value.
///
/// # Examples
///
/// ```
/// use routevolve::{CostRow, CostTable};
///
/// let table = CostTable::build([
///     CostRow { waypoint1: "A".into(), waypoint2: "B".into(), distance_m: 120.0, duration_s: 60.0 },
///     CostRow { waypoint1: "B".into(), waypoint2: "C".into(), distance_m: 80.0, duration_s: 45.0 },
/// ]).unwrap();
///
/// let a = table.id("A").unwrap();
/// let b = table.id("B").unwrap();
/// assert_eq!(table.distance(a, b).unwrap(), 120.0);
/// assert_eq!(table.distance(b, a).unwrap(), 120.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CostTable {
    labels: Vec<String>,
    ids: HashMap<String, usize>,
    pairs: HashMap<(usize, usize), PairCost>,
}

impl CostTable {
    /// Builds a table from interchange rows.
    ///
    /// Waypoint ids are assigned in order of first appearance. A pair
    /// recorded more than once keeps the later row.
    ///
    /// # Errors
    ///
    /// [`Error::Data`] if a row pairs a waypoint with itself, or has a
    /// negative or non-finite distance or duration.
    pub fn build(rows: impl IntoIterator<Item = CostRow>) -> Result<Self> {
        let mut table = CostTable::default();
        for row in rows {
            if row.waypoint1 == row.waypoint2 {
                return Err(Error::data(format!(
                    "waypoint {:?} paired with itself",
                    row.waypoint1
                )));
            }
            if !row.distance_m.is_finite() || row.distance_m < 0.0 {
                return Err(Error::data(format!(
                    "distance between {:?} and {:?} must be non-negative and finite, got {}",
                    row.waypoint1, row.waypoint2, row.distance_m
                )));
            }
            if !row.duration_s.is_finite() || row.duration_s < 0.0 {
                return Err(Error::data(format!(
                    "duration between {:?} and {:?} must be non-negative and finite, got {}",
                    row.waypoint1, row.waypoint2, row.duration_s
                )));
            }
            let a = table.intern(&row.waypoint1);
            let b = table.intern(&row.waypoint2);
            table.pairs.insert(
                Self::key(a, b),
                PairCost {
                    distance_m: row.distance_m,
                    duration_s: row.duration_s,
                },
            );
        }
        Ok(table)
    }

    /// All waypoint labels, in order of first appearance (= id order).
    pub fn waypoints(&self) -> &[String] {
        &self.labels
    }

    /// Number of distinct waypoints.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Id of a waypoint label, if present.
    pub fn id(&self, label: &str) -> Option<usize> {
        self.ids.get(label).copied()
    }

    /// Label of a waypoint id, if in range.
    pub fn label(&self, id: usize) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// Maps an id route back to waypoint labels.
    pub fn route_labels(&self, route: &[usize]) -> Vec<String> {
        route.iter().map(|&id| self.label_or_id(id)).collect()
    }

    /// Travel distance between two waypoints, in meters.
    ///
    /// Order-independent: `distance(a, b) == distance(b, a)`.
    ///
    /// # Errors
    ///
    /// [`Error::MissingPair`] if the pair was never recorded. This is
    /// fatal for the optimization run — there is no fallback value.
    pub fn distance(&self, a: usize, b: usize) -> Result<f64> {
        Ok(self.pair(a, b)?.distance_m)
    }

    /// Travel duration between two waypoints, in seconds.
    ///
    /// # Errors
    ///
    /// [`Error::MissingPair`] if the pair was never recorded.
    pub fn duration(&self, a: usize, b: usize) -> Result<f64> {
        Ok(self.pair(a, b)?.duration_s)
    }

    /// Exports every stored pair as interchange rows, sorted by id pair.
    ///
    /// The output is deterministic and round-trips through [`build`](Self::build).
    pub fn export(&self) -> Vec<CostRow> {
        let mut keys: Vec<(usize, usize)> = self.pairs.keys().copied().collect();
        keys.sort_unstable();
        keys.into_iter()
            .map(|(a, b)| {
                let cost = self.pairs[&(a, b)];
                CostRow {
                    waypoint1: self.labels[a].clone(),
                    waypoint2: self.labels[b].clone(),
                    distance_m: cost.distance_m,
                    duration_s: cost.duration_s,
                }
            })
            .collect()
    }

    fn pair(&self, a: usize, b: usize) -> Result<PairCost> {
        self.pairs
            .get(&Self::key(a, b))
            .copied()
            .ok_or_else(|| Error::MissingPair {
                a: self.label_or_id(a),
                b: self.label_or_id(b),
            })
    }

    fn intern(&mut self, label: &str) -> usize {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label.to_string());
        self.ids.insert(label.to_string(), id);
        id
    }

    /// Normalizes an id pair to its unordered key form.
    fn key(a: usize, b: usize) -> (usize, usize) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    fn label_or_id(&self, id: usize) -> String {
        self.labels
            .get(id)
            .cloned()
            .unwrap_or_else(|| format!("#{id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(a: &str, b: &str, distance: f64, duration: f64) -> CostRow {
        CostRow {
            waypoint1: a.into(),
            waypoint2: b.into(),
            distance_m: distance,
            duration_s: duration,
        }
    }

    // ---- Construction ----

    #[test]
    fn test_build_and_symmetric_lookup() {
        let table = CostTable::build([row("A", "B", 10.0, 5.0), row("B", "C", 20.0, 8.0)]).unwrap();

        let a = table.id("A").unwrap();
        let b = table.id("B").unwrap();
        let c = table.id("C").unwrap();

        assert_eq!(table.distance(a, b).unwrap(), 10.0);
        assert_eq!(table.distance(b, a).unwrap(), 10.0);
        assert_eq!(table.duration(b, c).unwrap(), 8.0);
        assert_eq!(table.duration(c, b).unwrap(), 8.0);
    }

    #[test]
    fn test_waypoints_in_first_appearance_order() {
        let table =
            CostTable::build([row("C", "A", 1.0, 1.0), row("A", "B", 2.0, 2.0)]).unwrap();
        assert_eq!(table.waypoints(), ["C", "A", "B"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.id("C"), Some(0));
        assert_eq!(table.label(2), Some("B"));
    }

    #[test]
    fn test_duplicate_pair_keeps_later_row() {
        let table =
            CostTable::build([row("A", "B", 10.0, 5.0), row("B", "A", 99.0, 50.0)]).unwrap();
        let a = table.id("A").unwrap();
        let b = table.id("B").unwrap();
        assert_eq!(table.distance(a, b).unwrap(), 99.0);
        assert_eq!(table.duration(a, b).unwrap(), 50.0);
    }

    #[test]
    fn test_empty_table() {
        let table = CostTable::build([]).unwrap();
        assert!(table.is_empty());
        assert!(table.export().is_empty());
    }

    // ---- Validation ----

    #[test]
    fn test_rejects_self_pair() {
        let err = CostTable::build([row("A", "A", 1.0, 1.0)]).unwrap_err();
        assert!(matches!(err, Error::Data { .. }), "got {err:?}");
    }

    #[test]
    fn test_rejects_negative_distance() {
        let err = CostTable::build([row("A", "B", -1.0, 1.0)]).unwrap_err();
        assert!(matches!(err, Error::Data { .. }), "got {err:?}");
    }

    #[test]
    fn test_rejects_negative_duration() {
        let err = CostTable::build([row("A", "B", 1.0, -0.5)]).unwrap_err();
        assert!(matches!(err, Error::Data { .. }), "got {err:?}");
    }

    #[test]
    fn test_rejects_non_finite_cost() {
        let err = CostTable::build([row("A", "B", f64::NAN, 1.0)]).unwrap_err();
        assert!(matches!(err, Error::Data { .. }), "got {err:?}");

        let err = CostTable::build([row("A", "B", 1.0, f64::INFINITY)]).unwrap_err();
        assert!(matches!(err, Error::Data { .. }), "got {err:?}");
    }

    // ---- Missing pairs ----

    #[test]
    fn test_missing_pair_is_an_error_not_a_default() {
        let table = CostTable::build([row("A", "B", 1.0, 1.0), row("C", "D", 2.0, 2.0)]).unwrap();
        let a = table.id("A").unwrap();
        let c = table.id("C").unwrap();

        let err = table.distance(a, c).unwrap_err();
        match err {
            Error::MissingPair { a, b } => {
                assert_eq!(a, "A");
                assert_eq!(b, "C");
            }
            other => panic!("expected MissingPair, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_pair_with_out_of_range_id() {
        let table = CostTable::build([row("A", "B", 1.0, 1.0)]).unwrap();
        let err = table.distance(0, 17).unwrap_err();
        assert!(matches!(err, Error::MissingPair { .. }), "got {err:?}");
    }

    // ---- Export ----

    #[test]
    fn test_export_is_deterministic_and_round_trips() {
        let rows = [
            row("A", "B", 10.0, 5.0),
            row("B", "C", 20.0, 8.0),
            row("A", "C", 30.0, 12.0),
        ];
        let table = CostTable::build(rows.clone()).unwrap();

        let exported = table.export();
        assert_eq!(exported.len(), 3);
        assert_eq!(exported, table.export());

        let rebuilt = CostTable::build(exported).unwrap();
        for (i, wa) in table.waypoints().iter().enumerate() {
            for (j, wb) in table.waypoints().iter().enumerate() {
                if i == j {
                    continue;
                }
                let (ra, rb) = (rebuilt.id(wa).unwrap(), rebuilt.id(wb).unwrap());
                assert_eq!(
                    table.distance(i, j).unwrap(),
                    rebuilt.distance(ra, rb).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_route_labels() {
        let table = CostTable::build([row("A", "B", 1.0, 1.0), row("B", "C", 1.0, 1.0)]).unwrap();
        assert_eq!(table.route_labels(&[2, 0, 1]), ["C", "A", "B"]);
    }
}
