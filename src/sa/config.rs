//! SA configuration.

use crate::error::ConfigError;

/// Configuration for the Simulated Annealing driver.
///
/// Temperature follows a geometric schedule, `T_{k+1} = cooling_rate * T_k`,
/// and the run always performs exactly `iterations` neighbor evaluations.
///
/// # Examples
///
/// ```
/// use u_tsp_anneal::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_iterations(5000)
///     .with_initial_temperature(100.0)
///     .with_cooling_rate(0.995)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SaConfig {
    /// Number of neighbor evaluations. There is no early exit.
    pub iterations: usize,

    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Random seed for reproducibility. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            initial_temperature: 10_000.0,
            cooling_rate: 0.995,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(ConfigError::InvalidTemperature(self.initial_temperature));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(ConfigError::InvalidCoolingRate(self.cooling_rate));
        }
        Ok(())
    }
}
