//! Pheromone field and the evaporation/reinforcement update rule.

use super::types::Tour;
use crate::error::AcoError;

/// Symmetric `n × n` matrix of nonnegative edge desirability.
///
/// The only state carried from one epoch to the next. Every deposit is
/// applied to both `[i][j]` and `[j][i]`, so a field that starts uniform
/// stays symmetric.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneField {
    n: usize,
    values: Vec<f64>,
}

impl PheromoneField {
    /// A field with every cell set to `value`.
    pub fn uniform(n: usize, value: f64) -> Self {
        Self {
            n,
            values: vec![value; n * n],
        }
    }

    /// Initial field for a colony: `colony_size / baseline_cost` everywhere.
    ///
    /// Ties the starting level to the scale of the `1 / cost` deposits.
    pub fn initial(n: usize, colony_size: usize, baseline_cost: f64) -> Self {
        Self::uniform(n, colony_size as f64 / baseline_cost)
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the field has no cells.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Pheromone on edge `(from, to)`.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.values[from * self.n + to]
    }

    /// All cells, row-major.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// One row of the field.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.values[from * self.n..(from + 1) * self.n]
    }

    /// Multiplies every cell by `1 - rho`.
    pub fn evaporate(&mut self, rho: f64) {
        let factor = 1.0 - rho;
        for v in &mut self.values {
            *v *= factor;
        }
    }

    /// Deposits `1 / tour_cost` on both directions of every tour edge,
    /// the closing edge included.
    ///
    /// # Errors
    ///
    /// [`AcoError::SizeMismatch`] if the tour does not cover exactly the
    /// field's cities. The field is left untouched.
    pub fn reinforce(&mut self, tour: &Tour, tour_cost: f64) -> Result<(), AcoError> {
        if tour.len() != self.n {
            return Err(AcoError::SizeMismatch {
                expected: self.n,
                actual: tour.len(),
            });
        }
        let amount = 1.0 / tour_cost;
        let n = self.n;
        for (a, b) in tour.edges() {
            self.values[a * n + b] += amount;
            self.values[b * n + a] += amount;
        }
        Ok(())
    }

    /// Whether `[i][j]` and `[j][i]` agree within `tolerance` for all pairs.
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        (0..self.n).all(|i| {
            ((i + 1)..self.n).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tolerance)
        })
    }
}
