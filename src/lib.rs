//! Genetic-algorithm search for low-cost cyclic waypoint tours.
//!
//! Given a symmetric table of pairwise travel costs, the crate searches
//! for a cheap visiting order over all waypoints, interpreted as a
//! closed cycle (traveling-salesman-style routing). The search is a
//! population-based heuristic (truncation selection over mutation-only
//! reproduction) with no optimality guarantee: correctness here means
//! convergent, reproducible, well-defined behavior.
//!
//! # Core Types
//!
//! - [`CostTable`]: immutable symmetric map from unordered waypoint
//!   pairs to travel distance and duration
//! - [`SearchConfig`]: algorithm parameters with builder-style setters
//! - [`SearchRunner`] / [`SearchResult`]: the generational loop and its
//!   outcome
//!
//! # Submodules
//!
//! - [`operators`]: the two route-perturbation operators (point
//!   mutation, segment shuffle)
//! - [`source`]: the seam to an external pairwise-cost acquisition
//!   collaborator (routing web service); the crate itself performs no
//!   network I/O, file I/O, or map rendering
//!
//! # Example
//!
//! ```
//! use routevolve::{CostRow, CostTable, SearchConfig, SearchRunner};
//!
//! let table = CostTable::build([
//!     CostRow { waypoint1: "A".into(), waypoint2: "B".into(), distance_m: 1.0, duration_s: 60.0 },
//!     CostRow { waypoint1: "B".into(), waypoint2: "C".into(), distance_m: 1.0, duration_s: 60.0 },
//!     CostRow { waypoint1: "A".into(), waypoint2: "C".into(), distance_m: 1.0, duration_s: 60.0 },
//! ]).unwrap();
//!
//! let config = SearchConfig::default()
//!     .with_generations(20)
//!     .with_population_size(20)
//!     .with_verbose(false)
//!     .with_seed(42);
//!
//! let result = SearchRunner::run(&table, &config).unwrap();
//! assert_eq!(result.best_fitness, 3.0);
//! ```
//!
//! # Feature Flags
//!
//! - `parallel`: evaluate distinct routes with rayon. Fitness is a pure
//!   function per route, so results are identical to sequential
//!   evaluation — only wall-clock time changes.
//! - `serde`: Serialize/Deserialize derives on the interchange and
//!   config types, for the tabular-persistence collaborator.

mod config;
mod cost;
mod error;
mod fitness;
pub mod operators;
mod population;
mod runner;
pub mod source;

pub use config::SearchConfig;
pub use cost::{CostRow, CostTable, PairCost};
pub use error::{Error, Result};
pub use fitness::tour_cost;
pub use population::{
    advance_generation, random_population, random_tour, Generation, GenerationStats,
};
pub use runner::{SearchResult, SearchRunner};
pub use source::{assemble_table, PairCostSource, QueryOptions};
