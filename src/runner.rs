//! Generational loop execution.
//!
//! [`SearchRunner`] orchestrates the complete search:
//! initialization → evaluate → select → reproduce, repeated for a fixed
//! number of generations, tracking the best route of the most recently
//! completed generation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SearchConfig;
use crate::cost::CostTable;
use crate::error::{Error, Result};
use crate::population::{advance_generation, random_population};

/// Result of a search run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best route of the last completed generation, as waypoint
    /// labels in visiting order (a closed cycle: the last waypoint
    /// connects back to the first).
    ///
    /// Note this is the minimum of the *final* generation, not an
    /// all-time minimum across generations; a later generation can
    /// regress past an earlier best. [`fitness_history`](Self::fitness_history)
    /// records each generation's minimum so callers can detect that.
    pub best: Vec<String>,

    /// Total cyclic travel distance of [`best`](Self::best), in meters.
    pub best_fitness: f64,

    /// Number of generations actually completed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best fitness of each completed generation, in order.
    pub fitness_history: Vec<f64>,
}

/// Executes the generational search loop.
///
/// # Usage
///
/// ```
/// use routevolve::{CostRow, CostTable, SearchConfig, SearchRunner};
///
/// let table = CostTable::build([
///     CostRow { waypoint1: "A".into(), waypoint2: "B".into(), distance_m: 1.0, duration_s: 1.0 },
///     CostRow { waypoint1: "B".into(), waypoint2: "C".into(), distance_m: 1.0, duration_s: 1.0 },
///     CostRow { waypoint1: "A".into(), waypoint2: "C".into(), distance_m: 1.0, duration_s: 1.0 },
/// ]).unwrap();
///
/// let config = SearchConfig::default()
///     .with_generations(10)
///     .with_population_size(20)
///     .with_verbose(false)
///     .with_seed(42);
///
/// let result = SearchRunner::run(&table, &config).unwrap();
/// assert_eq!(result.best_fitness, 3.0);
/// ```
pub struct SearchRunner;

impl SearchRunner {
    /// Runs the search to completion.
    ///
    /// # Errors
    ///
    /// [`Error::Data`] for an invalid configuration or an empty cost
    /// table; [`Error::MissingPair`] if evaluation crosses a pair the
    /// table does not record.
    pub fn run(table: &CostTable, config: &SearchConfig) -> Result<SearchResult> {
        Self::run_with_cancel(table, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The flag is checked between generations, after each one completes:
    /// cancellation never corrupts the cost table or the last completed
    /// generation's best route, and at least one generation always runs.
    pub fn run_with_cancel(
        table: &CostTable,
        config: &SearchConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SearchResult> {
        config.validate().map_err(Error::data)?;
        if table.is_empty() {
            return Err(Error::data("cost table records no waypoints"));
        }
        if !config.reproduces_population_size() {
            tracing::warn!(
                nominal = config.population_size,
                produced = config.next_population_size(),
                "elite arithmetic does not reproduce the nominal population \
                 size; the population will drift between generations"
            );
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut population = random_population(table.len(), config.population_size, &mut rng);
        let report_every = (config.generations / 10).max(1);

        let mut best: Option<(Vec<usize>, f64)> = None;
        let mut fitness_history = Vec::with_capacity(config.generations);
        let mut completed = 0;
        let mut cancelled = false;

        for generation in 0..config.generations {
            let step = advance_generation(&population, table, config, &mut rng)?;

            let (route, fitness) = step
                .ranked
                .into_iter()
                .next()
                .expect("non-empty population ranks at least one route");

            if config.verbose
                && (generation % report_every == 0 || generation + 1 == config.generations)
            {
                tracing::info!(
                    generation,
                    best_fitness = fitness,
                    distinct_genomes = step.stats.distinct_genomes,
                    "generation complete"
                );
            }

            fitness_history.push(fitness);
            best = Some((route, fitness));
            population = step.population;
            completed = generation + 1;

            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
        }

        let (route, best_fitness) =
            best.expect("at least one generation completes before the loop exits");

        Ok(SearchResult {
            best: table.route_labels(&route),
            best_fitness,
            generations: completed,
            cancelled,
            fitness_history,
        })
    }
}
