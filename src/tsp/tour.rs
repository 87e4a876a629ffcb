//! Tour construction, evaluation, and the swap move.
//!
//! A tour is a permutation of city indices `0..n`. It describes a closed
//! cycle: the last city connects back to the first.

use rand::seq::SliceRandom;
use rand::Rng;

use super::point::{distance, Point};

/// Total length of the closed cycle visiting `points` in `tour` order.
///
/// An empty tour has cost 0, a single-city tour has cost 0.
///
/// # Panics
///
/// Panics if `tour` contains an index outside `points`.
///
/// # Examples
///
/// ```
/// use u_tsp_anneal::tsp::{tour_cost, Point};
///
/// let square = [
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ];
/// assert!((tour_cost(&square, &[0, 1, 2, 3]) - 4.0).abs() < 1e-12);
/// ```
pub fn tour_cost(points: &[Point], tour: &[usize]) -> f64 {
    let (Some(&first), Some(&last)) = (tour.first(), tour.last()) else {
        return 0.0;
    };
    let open: f64 = tour
        .windows(2)
        .map(|w| distance(&points[w[0]], &points[w[1]]))
        .sum();
    open + distance(&points[last], &points[first])
}

/// Returns a copy of `tour` with two distinct random positions swapped.
///
/// Both positions are drawn uniformly; the second is redrawn until it
/// differs from the first.
///
/// # Panics
///
/// Panics if `tour` has fewer than two cities.
pub fn swap_neighbor<R: Rng>(tour: &[usize], rng: &mut R) -> Vec<usize> {
    let n = tour.len();
    assert!(n >= 2, "swap move needs at least 2 cities, got {n}");

    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n);
    while j == i {
        j = rng.random_range(0..n);
    }

    let mut next = tour.to_vec();
    next.swap(i, j);
    next
}

/// A uniformly shuffled permutation of `0..n`.
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut tour: Vec<usize> = (0..n).collect();
    tour.shuffle(rng);
    tour
}

/// Returns `true` if `tour` contains each index in `0..n` exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}
