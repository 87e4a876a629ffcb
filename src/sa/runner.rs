//! SA execution loop.

use super::config::SaConfig;
use super::types::SaProblem;
use crate::error::ConfigError;
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Best cost is sampled into [`SaResult::cost_history`] every this many iterations.
const HISTORY_INTERVAL: usize = 100;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Cost of the random initial solution.
    pub initial_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature after the last cooling step.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Best cost sampled at regular intervals for history tracking.
    pub cost_history: Vec<f64>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA optimization with a generator seeded from `config.seed`,
    /// or from a fresh random seed when none is set.
    pub fn run<P: SaProblem>(
        problem: &P,
        config: &SaConfig,
    ) -> Result<SaResult<P::Solution>, ConfigError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        debug!("annealing with seed {seed}");
        let mut rng = StdRng::seed_from_u64(seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs SA drawing every random number from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<P: SaProblem, R: Rng>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<P::Solution>, ConfigError> {
        config.validate()?;
        debug!(
            "annealing: {} iterations, T0 = {}, cooling rate = {}",
            config.iterations, config.initial_temperature, config.cooling_rate
        );

        // Initialize
        let mut current = problem.initial_solution(rng);
        let mut current_cost = problem.cost(&current);
        let initial_cost = current_cost;
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cost_history = vec![best_cost];

        if !problem.has_neighbors() {
            debug!("single-point solution space, nothing to anneal");
            return Ok(SaResult {
                best,
                best_cost,
                initial_cost,
                iterations: 0,
                final_temperature: temperature,
                accepted_moves,
                improving_moves,
                cost_history,
            });
        }

        let mut frozen = false;

        for iteration in 0..config.iterations {
            let candidate = problem.neighbor(&current, rng);
            let candidate_cost = problem.cost(&candidate);

            if accepts(current_cost, candidate_cost, temperature, rng) {
                if candidate_cost < current_cost {
                    improving_moves += 1;
                }
                current = candidate;
                current_cost = candidate_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                    trace!("iteration {iteration}: new best {best_cost}");
                }
            }

            // Cool down
            temperature *= config.cooling_rate;
            if temperature <= 0.0 && !frozen {
                frozen = true;
                debug!("temperature underflowed at iteration {iteration}, uphill moves disabled");
            }

            if (iteration + 1) % HISTORY_INTERVAL == 0 {
                cost_history.push(best_cost);
            }
        }

        // Final history entry
        if cost_history.last() != Some(&best_cost) {
            cost_history.push(best_cost);
        }

        info!(
            "annealing finished: best cost {best_cost} (initial {initial_cost}), \
             {accepted_moves} accepted / {improving_moves} improving moves, final T = {temperature:e}"
        );

        Ok(SaResult {
            best,
            best_cost,
            initial_cost,
            iterations: config.iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cost_history,
        })
    }
}

/// Metropolis probability of accepting a move that changes cost by `delta`.
///
/// Returns 1 for non-worsening moves and `exp(-delta / temperature)` for
/// worsening ones. A temperature that is not strictly positive rejects
/// every worsening move.
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta <= 0.0 {
        1.0
    } else if temperature > 0.0 {
        (-delta / temperature).exp()
    } else {
        0.0
    }
}

/// Acceptance rule: strict improvement, or a uniform draw in `[0, 1)` below
/// `exp((current_cost - candidate_cost) / temperature)`.
///
/// The random draw happens only when the candidate is not strictly better
/// and the temperature is positive.
pub fn accepts<R: Rng>(
    current_cost: f64,
    candidate_cost: f64,
    temperature: f64,
    rng: &mut R,
) -> bool {
    if candidate_cost < current_cost {
        return true;
    }
    if temperature <= 0.0 {
        return false;
    }
    let probability = acceptance_probability(candidate_cost - current_cost, temperature);
    rng.random::<f64>() < probability
}
