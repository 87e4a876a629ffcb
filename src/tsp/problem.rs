//! Euclidean TSP as an [`SaProblem`].

use log::debug;
use rand::Rng;

use super::point::Point;
use super::tour::{is_permutation, random_tour, swap_neighbor, tour_cost};
use crate::error::ConfigError;
use crate::sa::{SaConfig, SaProblem, SaResult, SaRunner};

/// A validated set of cities.
///
/// Holds at least one point, all with finite coordinates. The index of a
/// point in the list is its city id.
#[derive(Debug, Clone)]
pub struct TspProblem {
    points: Vec<Point>,
}

impl TspProblem {
    /// Creates a problem over `points`.
    ///
    /// Returns an error if the list is empty or a coordinate is not finite.
    pub fn new(points: Vec<Point>) -> Result<Self, ConfigError> {
        if points.is_empty() {
            return Err(ConfigError::EmptyInstance);
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(ConfigError::NonFiniteCoordinate { index });
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Cost of the closed cycle `tour`.
    pub fn tour_cost(&self, tour: &[usize]) -> f64 {
        tour_cost(&self.points, tour)
    }
}

impl SaProblem for TspProblem {
    type Solution = Vec<usize>;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        random_tour(self.points.len(), rng)
    }

    fn cost(&self, tour: &Vec<usize>) -> f64 {
        tour_cost(&self.points, tour)
    }

    fn neighbor<R: Rng>(&self, tour: &Vec<usize>, rng: &mut R) -> Vec<usize> {
        let next = swap_neighbor(tour, rng);
        debug_assert!(is_permutation(&next, self.points.len()));
        next
    }

    fn has_neighbors(&self) -> bool {
        self.points.len() >= 2
    }
}

/// Best tour found and its cycle length.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TspSolution {
    /// Visiting order, a permutation of city indices.
    pub tour: Vec<usize>,
    /// Total length including the closing edge.
    pub cost: f64,
}

impl From<SaResult<Vec<usize>>> for TspSolution {
    fn from(result: SaResult<Vec<usize>>) -> Self {
        Self {
            tour: result.best,
            cost: result.best_cost,
        }
    }
}

/// Anneals a tour over `points`.
///
/// Validates both the points and `config` before any work begins.
///
/// # Examples
///
/// ```
/// use u_tsp_anneal::sa::SaConfig;
/// use u_tsp_anneal::tsp::{solve, Point};
///
/// let points = vec![Point::new(0.0, 0.0), Point::new(0.0, 2.0)];
/// let solution = solve(points, &SaConfig::default().with_seed(1)).unwrap();
/// assert!((solution.cost - 4.0).abs() < 1e-12);
/// ```
pub fn solve(points: Vec<Point>, config: &SaConfig) -> Result<TspSolution, ConfigError> {
    let problem = TspProblem::new(points)?;
    let result = SaRunner::run(&problem, config)?;
    debug!("best tour: {:?}", result.best);
    Ok(result.into())
}
