//! Core trait for Simulated Annealing.

use rand::Rng;

/// Defines a Simulated Annealing problem.
///
/// The user implements neighbor generation and cost evaluation.
/// The SA driver handles temperature management, the acceptance
/// criterion, and cooling.
///
/// # Minimization
///
/// SA minimizes the cost function. For maximization, negate the cost.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_tsp_anneal::sa::SaProblem;
///
/// struct Shift;
///
/// impl SaProblem for Shift {
///     type Solution = i64;
///
///     fn initial_solution<R: Rng>(&self, rng: &mut R) -> i64 {
///         rng.random_range(-100..100)
///     }
///
///     fn cost(&self, x: &i64) -> f64 {
///         (*x as f64).abs()
///     }
///
///     fn neighbor<R: Rng>(&self, x: &i64, rng: &mut R) -> i64 {
///         if rng.random_bool(0.5) { x + 1 } else { x - 1 }
///     }
/// }
/// ```
pub trait SaProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// Creates a random initial solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates a perturbed copy of the current solution.
    ///
    /// Only called when [`has_neighbors`](SaProblem::has_neighbors) is true.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;

    /// Whether the solution space has more than one point.
    ///
    /// When false the driver returns the initial solution without iterating.
    fn has_neighbors(&self) -> bool {
        true
    }
}
