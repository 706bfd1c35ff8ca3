//! Population generation and the generation step.
//!
//! A population is a `Vec` of routes (id permutations) of nominal size
//! `population_size`; duplicates are allowed. [`advance_generation`]
//! performs one full evaluate → select → reproduce cycle: every
//! *distinct* genome is evaluated once, the top fraction survives as
//! elites, and each elite emits itself plus point-mutated and
//! segment-shuffled offspring, in rank order.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::SearchConfig;
use crate::cost::CostTable;
use crate::error::{Error, Result};
use crate::fitness::tour_cost;
use crate::operators::{point_mutation, segment_shuffle};

/// Observability snapshot of one generation step.
///
/// Reporting reads this; it never feeds back into selection or
/// reproduction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// Fitness of the top-ranked route this generation.
    pub best_fitness: f64,

    /// Number of distinct genomes evaluated this generation.
    pub distinct_genomes: usize,
}

/// Result of one generation step.
#[derive(Debug, Clone)]
pub struct Generation {
    /// The next generation's population: elites and their offspring, in
    /// elite-rank order.
    pub population: Vec<Vec<usize>>,

    /// Every distinct route of the evaluated population with its
    /// fitness, ascending (best first). Ties keep first-seen order.
    pub ranked: Vec<(Vec<usize>, f64)>,

    /// Per-generation statistics.
    pub stats: GenerationStats,
}

/// Returns a uniformly random permutation of `0..waypoint_count`.
pub fn random_tour<R: Rng>(waypoint_count: usize, rng: &mut R) -> Vec<usize> {
    let mut tour: Vec<usize> = (0..waypoint_count).collect();
    tour.shuffle(rng);
    tour
}

/// Returns `size` independent random tours.
pub fn random_population<R: Rng>(
    waypoint_count: usize,
    size: usize,
    rng: &mut R,
) -> Vec<Vec<usize>> {
    (0..size).map(|_| random_tour(waypoint_count, rng)).collect()
}

/// Advances a population one generation: evaluate, select, reproduce.
///
/// 1. Distinct routes are collected in first-seen order and evaluated
///    once each; identical genomes share one fitness computation.
/// 2. Distinct routes are ranked ascending by fitness (stable: equal
///    fitness keeps first-seen order).
/// 3. The top `config.elite_count()` routes (at most the distinct count)
///    survive as elites. Each elite, in rank order, emits one unchanged
///    copy, `mutants_per_elite` point-mutated offspring, and
///    `shuffles_per_elite` segment-shuffled offspring.
///
/// The produced population has `elite_count * offspring_per_elite()`
/// members, which need not equal the input size; see
/// [`SearchConfig::next_population_size`].
///
/// # Errors
///
/// [`Error::Data`] on an empty population; [`Error::MissingPair`] if any
/// evaluated route crosses an unrecorded pair.
pub fn advance_generation<R: Rng>(
    population: &[Vec<usize>],
    table: &CostTable,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<Generation> {
    if population.is_empty() {
        return Err(Error::data("cannot advance an empty population"));
    }

    let mut seen: HashSet<&[usize]> = HashSet::with_capacity(population.len());
    let mut distinct: Vec<&Vec<usize>> = Vec::with_capacity(population.len());
    for route in population {
        if seen.insert(route.as_slice()) {
            distinct.push(route);
        }
    }

    let scores = evaluate_distinct(&distinct, table, config.parallel)?;

    let mut ranked: Vec<(Vec<usize>, f64)> = distinct
        .into_iter()
        .zip(scores)
        .map(|(route, score)| (route.clone(), score))
        .collect();
    ranked.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let elite_count = config.elite_count().clamp(1, ranked.len());

    let mut next = Vec::with_capacity(elite_count * config.offspring_per_elite());
    for (elite, _) in &ranked[..elite_count] {
        next.push(elite.clone());
        for _ in 0..config.mutants_per_elite {
            next.push(point_mutation(elite, config.max_point_mutations, rng));
        }
        for _ in 0..config.shuffles_per_elite {
            next.push(segment_shuffle(
                elite,
                config.shuffle_min_len,
                config.shuffle_max_len,
                rng,
            ));
        }
    }

    let stats = GenerationStats {
        best_fitness: ranked[0].1,
        distinct_genomes: ranked.len(),
    };

    Ok(Generation {
        population: next,
        ranked,
        stats,
    })
}

/// Evaluate each distinct route once.
///
/// Fitness is pure per route, so the parallel path yields the same
/// scores as the sequential one — only wall-clock time changes.
fn evaluate_distinct(
    routes: &[&Vec<usize>],
    table: &CostTable,
    parallel: bool,
) -> Result<Vec<f64>> {
    #[cfg(feature = "parallel")]
    if parallel {
        return routes
            .par_iter()
            .map(|route| tour_cost(route, table))
            .collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    routes.iter().map(|route| tour_cost(route, table)).collect()
}
