//! Seam to the external pairwise-cost acquisition collaborator.
//!
//! The crate performs no network I/O. A caller that resolves travel
//! costs through a routing web service implements [`PairCostSource`];
//! [`assemble_table`] drives it over every unordered waypoint pair and
//! collects the answers into a [`CostTable`].
//!
//! Acquisition failures are **not** core errors: a pair the source
//! cannot resolve is skipped with a warning, and the pair simply never
//! enters the table. If such a pair is later required during fitness
//! evaluation it surfaces as
//! [`Error::MissingPair`](crate::Error::MissingPair) — callers wanting a
//! guaranteed-complete run must verify the table covers every pair
//! before starting. Retries, credentials, and rate limits belong to the
//! source implementation.

use std::fmt::Display;

use crate::cost::{CostRow, CostTable, PairCost};
use crate::error::Result;

/// Passthrough parameters for the routing-service collaborator.
///
/// The core never interprets these strings; they are handed to the
/// source verbatim with each query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryOptions {
    /// Means of travel, e.g. `"driving"`.
    pub mode: String,

    /// Unit system, e.g. `"metric"`.
    pub units: String,

    /// Response language, e.g. `"English"`.
    pub language: String,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            mode: "driving".into(),
            units: "metric".into(),
            language: "English".into(),
        }
    }
}

impl QueryOptions {
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// Resolves the travel cost of one waypoint pair.
///
/// Implemented by the external data-acquisition collaborator (typically
/// a routing web-service client). The source may be stateful (`&mut
/// self` allows connection reuse, caching, or request budgets).
pub trait PairCostSource {
    /// The source's failure type, shown in skip warnings.
    type Error: Display;

    /// Returns distance and duration between two waypoints.
    fn pair_cost(
        &mut self,
        options: &QueryOptions,
        from: &str,
        to: &str,
    ) -> std::result::Result<PairCost, Self::Error>;
}

/// Builds a [`CostTable`] by querying `source` for every unordered pair
/// of distinct waypoints, in the given order.
///
/// Pairs the source fails to resolve are skipped with a
/// `tracing::warn!`; everything that resolves still passes
/// [`CostTable::build`] validation. Waypoints whose every pair failed do
/// not appear in the resulting table.
///
/// # Errors
///
/// [`Error::Data`](crate::Error::Data) if a resolved pair carries a
/// negative or non-finite cost, or if `waypoints` contains duplicates
/// (a duplicate label makes a pair of the waypoint with itself).
pub fn assemble_table<S: PairCostSource>(
    waypoints: &[String],
    source: &mut S,
    options: &QueryOptions,
) -> Result<CostTable> {
    let mut rows = Vec::new();
    for (i, from) in waypoints.iter().enumerate() {
        for to in &waypoints[i + 1..] {
            match source.pair_cost(options, from, to) {
                Ok(cost) => rows.push(CostRow {
                    waypoint1: from.clone(),
                    waypoint2: to.clone(),
                    distance_m: cost.distance_m,
                    duration_s: cost.duration_s,
                }),
                Err(error) => {
                    tracing::warn!(
                        from = %from,
                        to = %to,
                        error = %error,
                        "failed to resolve pair cost; skipping"
                    );
                }
            }
        }
    }
    CostTable::build(rows)
}
