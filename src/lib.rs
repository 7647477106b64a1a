//! Ant Colony Optimization for the symmetric traveling salesman problem.
//!
//! An Ant System over a fixed cost matrix:
//!
//! - A deterministic **nearest-neighbor** baseline scales the initial
//!   pheromone level.
//! - Each epoch, every agent builds a tour by **roulette selection**
//!   weighted by `pheromone^alpha * (1 / cost)^beta`.
//! - The **pheromone field** evaporates by `rho` once per epoch and is
//!   reinforced by `1 / cost` along every tour of that epoch.
//!
//! The field after every epoch is handed to an [`aco::EpochObserver`];
//! [`aco::PheromoneLog`] writes it as one line of text per epoch. With a
//! fixed seed the output is reproducible byte for byte.
//!
//! # Example
//!
//! ```
//! use u_aco::aco::{AcoConfig, AcoRunner, CostMatrix};
//!
//! let inf = f64::INFINITY;
//! let matrix = CostMatrix::new(vec![
//!     vec![inf, 3.0, 1.0, 2.0],
//!     vec![3.0, inf, 5.0, 4.0],
//!     vec![1.0, 5.0, inf, 2.0],
//!     vec![2.0, 4.0, 2.0, inf],
//! ])
//! .unwrap();
//!
//! let config = AcoConfig::default().with_epochs(20).with_seed(7);
//! let result = AcoRunner::run_silent(&matrix, &config).unwrap();
//! assert!(result.best_cost <= result.baseline_cost);
//! ```

pub mod aco;
pub mod error;

pub use error::AcoError;
