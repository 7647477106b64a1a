//! Probabilistic tour construction.
//!
//! Each agent starts at a random city and extends its tour one city at a
//! time. The next city is drawn with roulette-wheel selection where
//! candidate `c` from city `cur` has weight
//!
//! ```text
//! pheromone[cur][c]^alpha * (1 / cost[cur][c])^beta
//! ```
//!
//! Visited cities and the current city are excluded and take no share of
//! the wheel.

use super::config::{AcoConfig, StartCity};
use super::pheromone::PheromoneField;
use super::types::{CostMatrix, Tour};
use crate::error::AcoError;
use rand::Rng;
use tracing::{debug, error};

/// Roulette-wheel draw over `weights`.
///
/// `None` entries are excluded candidates. The draw is uniform in
/// `[0, sum)`; candidates are walked in index order and the first one whose
/// weight exceeds the remaining draw wins. Zero-weight candidates can
/// never win.
///
/// Returns `None` when no candidate has a positive weight or the weights
/// do not sum to a positive finite number.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_aco::aco::roulette_select;
///
/// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
/// let weights = [None, Some(0.0), Some(2.5), None];
/// assert_eq!(roulette_select(&weights, &mut rng), Some(2));
/// assert_eq!(roulette_select(&[None, Some(0.0)], &mut rng), None);
/// ```
pub fn roulette_select<R: Rng>(weights: &[Option<f64>], rng: &mut R) -> Option<usize> {
    let mut sum = 0.0;
    let mut last_positive = None;
    for (i, w) in weights.iter().enumerate() {
        if let Some(w) = *w {
            if w.is_nan() || w < 0.0 {
                return None;
            }
            if w > 0.0 {
                sum += w;
                last_positive = Some(i);
            }
        }
    }
    if !sum.is_finite() || sum <= 0.0 {
        return None;
    }

    let value = rng.random_range(0.0..sum);
    Some(spin(weights, value, last_positive?))
}

/// Walks the wheel with a draw already taken from `[0, sum)`.
fn spin(weights: &[Option<f64>], mut value: f64, last_positive: usize) -> usize {
    for (i, w) in weights.iter().enumerate() {
        let Some(w) = *w else { continue };
        if value < w {
            return i;
        }
        value -= w;
    }

    // Rounding residue: the partial subtractions can leave the draw just
    // above the final weight.
    debug!(residue = value, city = last_positive, "roulette residue");
    last_positive
}

/// Selection weights from `current` for every city.
///
/// `None` for `current` itself and for visited cities.
///
/// # Errors
///
/// - [`AcoError::SizeMismatch`] if `field` or `visited` does not have one
///   entry per city of `matrix`.
/// - [`AcoError::CityOutOfRange`] if `current` is not a city of `matrix`.
pub fn selection_weights(
    matrix: &CostMatrix,
    field: &PheromoneField,
    current: usize,
    visited: &[bool],
    alpha: f64,
    beta: f64,
) -> Result<Vec<Option<f64>>, AcoError> {
    let n = matrix.len();
    check_size(n, field.len())?;
    check_size(n, visited.len())?;
    if current >= n {
        return Err(AcoError::CityOutOfRange {
            city: current,
            cities: n,
        });
    }

    Ok((0..n)
        .map(|city| {
            if visited[city] {
                return None;
            }
            let cost = matrix.cost(current, city)?;
            let pheromone = field.get(current, city).powf(alpha);
            let heuristic = (1.0 / cost).powf(beta);
            Some(pheromone * heuristic)
        })
        .collect())
}

fn check_size(expected: usize, actual: usize) -> Result<(), AcoError> {
    if expected == actual {
        Ok(())
    } else {
        Err(AcoError::SizeMismatch { expected, actual })
    }
}

/// Builds one agent's tour.
///
/// The field is read only. Random draws happen in a fixed order (start
/// city, then one draw per step) so a seeded `rng` reproduces the tour.
///
/// # Errors
///
/// - [`AcoError::SizeMismatch`] if `field` and `matrix` disagree on the
///   city count. Checked before any random draw.
/// - [`AcoError::SelectionExhausted`] if a roulette draw finds no eligible
///   candidate. The run cannot continue past this point.
pub fn construct_tour<R: Rng>(
    matrix: &CostMatrix,
    field: &PheromoneField,
    config: &AcoConfig,
    rng: &mut R,
) -> Result<Tour, AcoError> {
    let n = matrix.len();
    check_size(n, field.len())?;
    let start = match config.start {
        StartCity::Any => rng.random_range(0..n),
        StartCity::ExcludeOrigin => rng.random_range(1..n),
    };

    let mut visited = vec![false; n];
    visited[start] = true;
    let mut cities = Vec::with_capacity(n);
    cities.push(start);

    let mut current = start;
    for step in 1..n {
        let weights =
            selection_weights(matrix, field, current, &visited, config.alpha, config.beta)?;
        let Some(next) = roulette_select(&weights, rng) else {
            error!(current, step, "roulette selection exhausted");
            return Err(AcoError::SelectionExhausted { current, step });
        };
        visited[next] = true;
        cities.push(next);
        current = next;
    }

    Ok(Tour::from_permutation(cities))
}
