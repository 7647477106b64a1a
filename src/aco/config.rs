//! ACO configuration.

use crate::error::AcoError;

/// How each agent picks the city it starts its tour from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StartCity {
    /// Uniform over all cities `[0, n)`.
    #[default]
    Any,

    /// Uniform over `[1, n)`, never city 0.
    ///
    /// Reproduces the start distribution of the reference Ant System demo.
    ExcludeOrigin,
}

/// Configuration for the Ant Colony Optimization run.
///
/// # Examples
///
/// ```
/// use u_aco::aco::{AcoConfig, StartCity};
///
/// let config = AcoConfig::default()
///     .with_colony_size(10)
///     .with_epochs(200)
///     .with_alpha(1.0)
///     .with_beta(3.0)
///     .with_evaporation(0.2)
///     .with_start(StartCity::Any)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of agents (ants) building a tour each epoch.
    pub colony_size: usize,

    /// Number of epochs. The loop always runs all of them.
    pub epochs: usize,

    /// Pheromone exponent. Higher = follow accumulated trails more.
    pub alpha: f64,

    /// Heuristic exponent applied to `1 / cost`. Higher = greedier.
    pub beta: f64,

    /// Evaporation rate `rho` in `[0, 1)`.
    pub evaporation: f64,

    /// Start city distribution for agents.
    pub start: StartCity,

    /// Start city of the nearest-neighbor baseline tour.
    pub baseline_start: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            colony_size: 3,
            epochs: 100,
            alpha: 1.0,
            beta: 2.0,
            evaporation: 0.5,
            start: StartCity::default(),
            baseline_start: 0,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Parameters of the reference demo: 3 ants, 100 epochs, `alpha = 1`,
    /// `beta = 2`, `rho = 0.5`, agents never starting at city 0.
    pub fn reference() -> Self {
        Self::default().with_start(StartCity::ExcludeOrigin)
    }

    pub fn with_colony_size(mut self, n: usize) -> Self {
        self.colony_size = n;
        self
    }

    pub fn with_epochs(mut self, n: usize) -> Self {
        self.epochs = n;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_evaporation(mut self, rho: f64) -> Self {
        self.evaporation = rho;
        self
    }

    pub fn with_start(mut self, start: StartCity) -> Self {
        self.start = start;
        self
    }

    pub fn with_baseline_start(mut self, city: usize) -> Self {
        self.baseline_start = city;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// `baseline_start` depends on the matrix size and is checked by the
    /// runner.
    pub fn validate(&self) -> Result<(), AcoError> {
        if self.colony_size == 0 {
            return Err(AcoError::InvalidConfig(
                "colony_size must be positive".into(),
            ));
        }
        if self.epochs == 0 {
            return Err(AcoError::InvalidConfig("epochs must be positive".into()));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(AcoError::InvalidConfig(format!(
                "alpha must be finite and non-negative, got {}",
                self.alpha
            )));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(AcoError::InvalidConfig(format!(
                "beta must be finite and non-negative, got {}",
                self.beta
            )));
        }
        if !(0.0..1.0).contains(&self.evaporation) {
            return Err(AcoError::InvalidConfig(format!(
                "evaporation must be in [0, 1), got {}",
                self.evaporation
            )));
        }
        Ok(())
    }
}
