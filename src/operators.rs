//! Route mutation operators.
//!
//! Both operators perturb a permutation-encoded route and return a new
//! route; the input is never modified. Both preserve the permutation
//! invariant: same length, same element multiset, no duplicates
//! introduced or lost.
//!
//! - [`point_mutation`]: a small number of random position swaps — O(k)
//! - [`segment_shuffle`]: relocate a contiguous block — O(n)

use rand::Rng;

/// Point mutation: apply 1..=`max_mutations` random swaps.
///
/// The swap count is drawn uniformly, then each swap picks two
/// **distinct** random positions and exchanges their contents. Swaps are
/// independent: a later swap may touch positions moved by an earlier one.
///
/// Routes shorter than two elements are returned unchanged, as is any
/// route when `max_mutations` is 0.
///
/// # Complexity
/// O(n + k) for the copy and k swaps
pub fn point_mutation<R: Rng>(route: &[usize], max_mutations: usize, rng: &mut R) -> Vec<usize> {
    let mut out = route.to_vec();
    let n = out.len();
    if n < 2 || max_mutations == 0 {
        return out;
    }
    let count = rng.random_range(1..=max_mutations);
    for _ in 0..count {
        let i = rng.random_range(0..n);
        let mut j = rng.random_range(0..n);
        while j == i {
            j = rng.random_range(0..n);
        }
        out.swap(i, j);
    }
    out
}

/// Segment shuffle: move a contiguous block to a new position.
///
/// Picks a start index uniformly over the route and a nominal segment
/// length uniformly from `[min_len, max_len]`. The extracted segment runs
/// from the start to at most the end of the route, so its effective
/// length may be shorter than drawn. The segment is removed and
/// reinserted as a block at an insertion point chosen uniformly over the
/// `remaining + 1` valid positions of the shortened route, preserving the
/// segment's internal order.
///
/// Routes shorter than two elements are returned unchanged.
///
/// # Panics
/// Panics if `min_len` is 0 or greater than `max_len`.
///
/// # Complexity
/// O(n)
pub fn segment_shuffle<R: Rng>(
    route: &[usize],
    min_len: usize,
    max_len: usize,
    rng: &mut R,
) -> Vec<usize> {
    assert!(
        min_len >= 1 && min_len <= max_len,
        "segment length range must satisfy 1 <= min_len <= max_len"
    );
    let n = route.len();
    if n < 2 {
        return route.to_vec();
    }

    let start = rng.random_range(0..n);
    let nominal = rng.random_range(min_len..=max_len);
    let end = (start + nominal).min(n);

    let mut out = route.to_vec();
    let segment: Vec<usize> = out.drain(start..end).collect();
    let insert_at = rng.random_range(0..=out.len());
    out.splice(insert_at..insert_at, segment);
    out
}
