//! Error types for the ant colony optimizer.

use thiserror::Error;

/// Errors produced while configuring or running the colony.
#[derive(Debug, Error)]
pub enum AcoError {
    /// The roulette draw found no candidate with a positive, finite weight.
    ///
    /// Fatal: the run is aborted. Under a valid cost matrix this only
    /// happens when weights degenerate numerically (underflow, overflow).
    #[error("roulette selection exhausted at city {current} (step {step})")]
    SelectionExhausted {
        /// City the agent was standing on.
        current: usize,
        /// Construction step (1-based position in the tour being filled).
        step: usize,
    },

    /// Invalid algorithm parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The cost table is not a total symmetric matrix of positive costs.
    #[error("invalid cost matrix: {0}")]
    InvalidCostMatrix(String),

    /// A city sequence is not a permutation.
    #[error("invalid tour: {0}")]
    InvalidTour(String),

    /// A city index outside `[0, cities)`.
    #[error("city {city} out of range for {cities} cities")]
    CityOutOfRange { city: usize, cities: usize },

    /// Cost matrix, pheromone field, tour or visited set disagree on the
    /// number of cities.
    #[error("size mismatch: expected {expected} cities, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// The epoch observer failed to write its output.
    #[error("pheromone log write failed: {0}")]
    Log(#[from] std::io::Error),
}
