//! Search configuration.
//!
//! [`SearchConfig`] holds every tunable of the generational loop.

/// Configuration for the route search.
///
/// # Defaults
///
/// ```
/// use routevolve::SearchConfig;
///
/// let config = SearchConfig::default();
/// assert_eq!(config.generations, 5000);
/// assert_eq!(config.population_size, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use routevolve::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_generations(500)
///     .with_population_size(40)
///     .with_seed(42);
/// ```
///
/// # Population-size coupling
///
/// Each generation keeps `elite_count()` routes and emits
/// `offspring_per_elite()` routes per elite, so the next generation has
/// [`next_population_size`](Self::next_population_size) members. With the
/// defaults (elite fraction 1/10, 2 point-mutants and 7 shuffles per
/// elite) this reproduces `population_size` exactly whenever the size is
/// a multiple of 10. Other settings make the population drift
/// generation-over-generation; the runner accepts that and warns once.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Number of generations to run. The loop always runs to completion;
    /// there is no convergence-based early stop.
    pub generations: usize,

    /// Nominal number of routes per generation.
    pub population_size: usize,

    /// Fraction of the population selected as elites each generation
    /// (truncation selection), in `(0, 1]`. The elite count is rounded up.
    pub elite_fraction: f64,

    /// Point-mutated offspring emitted per elite.
    pub mutants_per_elite: usize,

    /// Segment-shuffled offspring emitted per elite.
    pub shuffles_per_elite: usize,

    /// Upper bound on swaps per point mutation (the count is drawn from
    /// `1..=max_point_mutations`).
    pub max_point_mutations: usize,

    /// Minimum nominal segment length for the shuffle operator.
    pub shuffle_min_len: usize,

    /// Maximum nominal segment length for the shuffle operator.
    pub shuffle_max_len: usize,

    /// Emit periodic progress logs (every `generations / 10` and the
    /// final generation). Has no effect on the search outcome.
    pub verbose: bool,

    /// Evaluate distinct routes in parallel using rayon.
    ///
    /// Only effective with the `parallel` cargo feature; fitness is a
    /// pure function per route, so results are identical either way.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            generations: 5000,
            population_size: 100,
            elite_fraction: 0.1,
            mutants_per_elite: 2,
            shuffles_per_elite: 7,
            max_point_mutations: 3,
            shuffle_min_len: 2,
            shuffle_max_len: 20,
            verbose: true,
            parallel: false,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Sets the generation count.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the nominal population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the elite fraction, clamped to `[0.0, 1.0]`.
    pub fn with_elite_fraction(mut self, fraction: f64) -> Self {
        self.elite_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of point-mutated offspring per elite.
    pub fn with_mutants_per_elite(mut self, n: usize) -> Self {
        self.mutants_per_elite = n;
        self
    }

    /// Sets the number of segment-shuffled offspring per elite.
    pub fn with_shuffles_per_elite(mut self, n: usize) -> Self {
        self.shuffles_per_elite = n;
        self
    }

    /// Sets the maximum swaps per point mutation.
    pub fn with_max_point_mutations(mut self, n: usize) -> Self {
        self.max_point_mutations = n;
        self
    }

    /// Sets the nominal segment length range for the shuffle operator.
    pub fn with_shuffle_len(mut self, min: usize, max: usize) -> Self {
        self.shuffle_min_len = min;
        self.shuffle_max_len = max;
        self
    }

    /// Enables or disables progress logging.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Enables or disables parallel fitness evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of elites kept each generation: `ceil(population_size *
    /// elite_fraction)`.
    pub fn elite_count(&self) -> usize {
        (self.population_size as f64 * self.elite_fraction).ceil() as usize
    }

    /// Routes emitted per elite: the elite itself plus its offspring.
    pub fn offspring_per_elite(&self) -> usize {
        1 + self.mutants_per_elite + self.shuffles_per_elite
    }

    /// Size of the population produced by one generation step.
    pub fn next_population_size(&self) -> usize {
        self.elite_count() * self.offspring_per_elite()
    }

    /// Whether one generation step reproduces `population_size` exactly.
    pub fn reproduces_population_size(&self) -> bool {
        self.next_population_size() == self.population_size
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.generations == 0 {
            return Err("generations must be at least 1".into());
        }
        if !(self.elite_fraction > 0.0 && self.elite_fraction <= 1.0) {
            return Err("elite_fraction must be in (0, 1]".into());
        }
        if self.elite_count() == 0 {
            return Err("elite_fraction too low: no elites would survive".into());
        }
        if self.offspring_per_elite() < 2 {
            return Err("each elite must emit at least one offspring".into());
        }
        if self.max_point_mutations == 0 {
            return Err("max_point_mutations must be at least 1".into());
        }
        if self.shuffle_min_len < 2 {
            return Err("shuffle_min_len must be at least 2".into());
        }
        if self.shuffle_max_len < self.shuffle_min_len {
            return Err("shuffle_max_len must be >= shuffle_min_len".into());
        }
        Ok(())
    }
}
