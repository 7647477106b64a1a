//! Ant Colony Optimization (Ant System) on a symmetric cost matrix.
//!
//! # Key Types
//!
//! - [`CostMatrix`]: Fixed symmetric travel costs; the diagonal is an absent edge
//! - [`Tour`]: A Hamiltonian cycle over all cities
//! - [`PheromoneField`]: Edge desirability carried across epochs
//! - [`AcoConfig`]: Colony size, epoch count, exponents, evaporation rate
//! - [`AcoRunner`]: Executes the epoch loop
//! - [`EpochObserver`]: Receives the field after every epoch
//!
//! # Algorithm
//!
//! 1. Build a nearest-neighbor tour; set every pheromone cell to
//!    `colony_size / cost(greedy)`.
//! 2. For each epoch, every agent constructs a tour with roulette
//!    selection. The field is then evaporated by `(1 - rho)` and each tour
//!    deposits `1 / cost(tour)` on both directions of its edges.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod config;
mod construct;
mod greedy;
mod observer;
mod pheromone;
mod runner;
mod types;

pub use config::{AcoConfig, StartCity};
pub use construct::{construct_tour, roulette_select, selection_weights};
pub use greedy::nearest_neighbor;
pub use observer::{format_field, EpochObserver, FieldHistory, NoopObserver, PheromoneLog};
pub use pheromone::PheromoneField;
pub use runner::{AcoResult, AcoRunner};
pub use types::{CostMatrix, Tour};
