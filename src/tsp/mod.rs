//! Euclidean Traveling Salesman Problem.
//!
//! Cities are points in the plane; a tour is a permutation of their
//! indices read as a closed cycle. [`solve`] anneals a tour using the
//! pairwise swap move and the driver in [`crate::sa`].

mod point;
mod problem;
mod tour;

pub use point::{distance, Point};
pub use problem::{solve, TspProblem, TspSolution};
pub use tour::{is_permutation, random_tour, swap_neighbor, tour_cost};
