//! Crate-wide error type.
//!
//! Two failure kinds exist: [`Error::Data`] for malformed input that is
//! fatal before any search begins, and [`Error::MissingPair`] for an
//! unrecorded waypoint pair hit during fitness evaluation. Pair lookups
//! never fall back to a default value; an incomplete table is a caller
//! error that must surface, not be scored around.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by table construction, configuration, and the search.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed cost-table input or invalid configuration.
    ///
    /// Raised at construction time (negative cost, self-pair, empty
    /// waypoint set, rejected config) — always before the generational
    /// loop starts.
    #[error("invalid input data: {reason}")]
    Data { reason: String },

    /// A waypoint pair required during evaluation was never recorded.
    ///
    /// Fatal for the evaluation call; propagates out of the run. Callers
    /// are responsible for supplying a complete cost table for the full
    /// waypoint set before starting.
    #[error("no cost recorded between {a:?} and {b:?}")]
    MissingPair { a: String, b: String },
}

impl Error {
    pub(crate) fn data(reason: impl Into<String>) -> Self {
        Error::Data {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = Error::data("negative distance");
        assert_eq!(e.to_string(), "invalid input data: negative distance");

        let e = Error::MissingPair {
            a: "Berlin".into(),
            b: "Madrid".into(),
        };
        assert_eq!(
            e.to_string(),
            "no cost recorded between \"Berlin\" and \"Madrid\""
        );
    }
}
