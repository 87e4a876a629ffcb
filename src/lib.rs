//! Euclidean TSP heuristic solver based on simulated annealing.
//!
//! - [`sa`]: generic Simulated Annealing driver with geometric cooling,
//!   a fixed iteration budget, and the Metropolis acceptance rule.
//! - [`tsp`]: cities, tour cost, the pairwise swap move, and [`tsp::solve`].
//! - [`tsplib`]: reads city coordinates from TSPLIB files.
//! - [`error`]: configuration and loading errors.
//!
//! # Example
//!
//! ```
//! use u_tsp_anneal::sa::SaConfig;
//! use u_tsp_anneal::tsp::{solve, Point};
//!
//! let cities = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//! ];
//! let config = SaConfig::default()
//!     .with_iterations(5000)
//!     .with_initial_temperature(100.0)
//!     .with_cooling_rate(0.995)
//!     .with_seed(42);
//! let solution = solve(cities, &config).unwrap();
//! assert!((solution.cost - 4.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod sa;
pub mod tsp;
pub mod tsplib;

pub use error::{ConfigError, LoadError};
