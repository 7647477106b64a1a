//! ACO epoch loop.
//!
//! [`AcoRunner`] owns the pheromone field and the random sequence for the
//! whole run: greedy baseline → initial field → repeat (construct one tour
//! per agent → evaporate → reinforce → report) for a fixed epoch count.

use super::config::AcoConfig;
use super::construct::construct_tour;
use super::greedy::nearest_neighbor;
use super::observer::{EpochObserver, NoopObserver};
use super::pheromone::PheromoneField;
use super::types::{CostMatrix, Tour};
use crate::error::AcoError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

/// Result of an ACO run.
#[derive(Debug, Clone)]
pub struct AcoResult {
    /// Cheapest tour seen, the greedy baseline included.
    pub best: Tour,

    /// Cost of `best`.
    pub best_cost: f64,

    /// The nearest-neighbor tour used to scale the initial field.
    pub baseline: Tour,

    /// Cost of `baseline`.
    pub baseline_cost: f64,

    /// Number of epochs executed.
    pub epochs: usize,

    /// Field after the last epoch.
    pub pheromone: PheromoneField,

    /// Best cost at the end of each epoch.
    pub cost_history: Vec<f64>,
}

/// Executes the Ant System epoch loop.
///
/// # Usage
///
/// ```
/// use u_aco::aco::{AcoConfig, AcoRunner, CostMatrix, PheromoneLog};
///
/// let matrix = CostMatrix::from_fn(6, |i, j| (i as f64 - j as f64).abs()).unwrap();
/// let config = AcoConfig::default().with_epochs(5).with_seed(42);
///
/// let mut log = PheromoneLog::new(Vec::new());
/// let result = AcoRunner::run(&matrix, &config, &mut log).unwrap();
///
/// let text = String::from_utf8(log.into_inner()).unwrap();
/// assert_eq!(text.lines().count(), 5);
/// assert_eq!(result.epochs, 5);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the colony, reporting the field to `observer` after every epoch.
    ///
    /// # Errors
    ///
    /// - [`AcoError::InvalidConfig`] / [`AcoError::CityOutOfRange`] before
    ///   any epoch runs.
    /// - [`AcoError::SelectionExhausted`] if tour construction degenerates;
    ///   the run stops at that point.
    /// - Any error returned by the observer.
    pub fn run<O: EpochObserver + ?Sized>(
        matrix: &CostMatrix,
        config: &AcoConfig,
        observer: &mut O,
    ) -> Result<AcoResult, AcoError> {
        config.validate()?;
        let n = matrix.len();

        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::seed_from_u64(rand::random()),
        };

        // Initializing
        let baseline = nearest_neighbor(matrix, config.baseline_start)?;
        let baseline_cost = baseline.cost(matrix);
        let mut field = PheromoneField::initial(n, config.colony_size, baseline_cost);

        info!(
            cities = n,
            colony_size = config.colony_size,
            epochs = config.epochs,
            baseline_cost,
            "starting ant colony"
        );

        let mut best = baseline.clone();
        let mut best_cost = baseline_cost;
        let mut cost_history = Vec::with_capacity(config.epochs);
        let mut colony: Vec<(Tour, f64)> = Vec::with_capacity(config.colony_size);

        // Running
        for epoch in 0..config.epochs {
            colony.clear();
            for agent in 0..config.colony_size {
                let tour = construct_tour(matrix, &field, config, &mut rng)?;
                let cost = tour.cost(matrix);
                trace!(epoch, agent, cost, "tour constructed");
                colony.push((tour, cost));
            }

            field.evaporate(config.evaporation);
            for (tour, cost) in &colony {
                field.reinforce(tour, *cost)?;
            }

            for (tour, cost) in &colony {
                if *cost < best_cost {
                    best = tour.clone();
                    best_cost = *cost;
                }
            }
            cost_history.push(best_cost);
            debug!(epoch, best_cost, "epoch complete");

            observer.on_epoch(epoch, &field)?;
        }

        info!(best_cost, baseline_cost, "ant colony finished");

        Ok(AcoResult {
            best,
            best_cost,
            baseline,
            baseline_cost,
            epochs: config.epochs,
            pheromone: field,
            cost_history,
        })
    }

    /// Runs the colony without per-epoch output.
    pub fn run_silent(matrix: &CostMatrix, config: &AcoConfig) -> Result<AcoResult, AcoError> {
        Self::run(matrix, config, &mut NoopObserver)
    }
}
