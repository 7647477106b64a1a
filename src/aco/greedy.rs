//! Nearest-neighbor construction heuristic.
//!
//! Produces the baseline tour whose cost scales the initial pheromone
//! level. Not part of the optimization loop.

use super::types::{CostMatrix, Tour};
use crate::error::AcoError;

/// Builds a tour by always moving to the cheapest unvisited city.
///
/// Ties go to the lowest city index. Deterministic.
///
/// # Errors
///
/// [`AcoError::CityOutOfRange`] if `start >= matrix.len()`.
///
/// # Examples
///
/// ```
/// use u_aco::aco::{nearest_neighbor, CostMatrix};
///
/// let inf = f64::INFINITY;
/// let matrix = CostMatrix::new(vec![
///     vec![inf, 3.0, 1.0, 2.0],
///     vec![3.0, inf, 5.0, 4.0],
///     vec![1.0, 5.0, inf, 2.0],
///     vec![2.0, 4.0, 2.0, inf],
/// ])
/// .unwrap();
///
/// let tour = nearest_neighbor(&matrix, 0).unwrap();
/// assert_eq!(tour.cities(), &[0, 2, 3, 1]);
/// assert_eq!(tour.cost(&matrix), 10.0);
/// ```
pub fn nearest_neighbor(matrix: &CostMatrix, start: usize) -> Result<Tour, AcoError> {
    let n = matrix.len();
    if start >= n {
        return Err(AcoError::CityOutOfRange {
            city: start,
            cities: n,
        });
    }

    let mut visited = vec![false; n];
    visited[start] = true;
    let mut cities = Vec::with_capacity(n);
    cities.push(start);

    let mut current = start;
    for _ in 1..n {
        let mut nearest: Option<(usize, f64)> = None;
        for (city, _) in visited.iter().enumerate().filter(|&(_, &v)| !v) {
            let Some(cost) = matrix.cost(current, city) else {
                continue;
            };
            // Strict comparison keeps the lowest index on ties.
            if nearest.is_none_or(|(_, best)| cost < best) {
                nearest = Some((city, cost));
            }
        }

        // At least one unvisited city remains while the loop runs.
        let Some((next, _)) = nearest else {
            break;
        };
        visited[next] = true;
        cities.push(next);
        current = next;
    }

    Ok(Tour::from_permutation(cities))
}
