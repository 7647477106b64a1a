//! Cost model and tour representation.

use crate::error::AcoError;

/// Fixed symmetric travel costs between `n` cities.
///
/// Every pair of distinct cities has a positive, finite cost. There is no
/// edge from a city to itself: [`cost`](CostMatrix::cost) returns `None` on
/// the diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    n: usize,
    // Row-major; diagonal cells are unused.
    costs: Vec<f64>,
}

impl CostMatrix {
    /// Builds a matrix from full rows.
    ///
    /// Diagonal entries are ignored, so tables that mark self-distance with
    /// a sentinel such as `f64::INFINITY` are accepted as-is.
    ///
    /// # Errors
    ///
    /// [`AcoError::InvalidCostMatrix`] if there are fewer than two cities,
    /// a row has the wrong length, an off-diagonal cost is not positive and
    /// finite, or `rows[i][j] != rows[j][i]`.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, AcoError> {
        let n = rows.len();
        if n < 2 {
            return Err(AcoError::InvalidCostMatrix(format!(
                "need at least 2 cities, got {n}"
            )));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(AcoError::InvalidCostMatrix(format!(
                "row {i} has {} entries, expected {n}",
                row.len()
            )));
        }

        for i in 0..n {
            for j in (i + 1)..n {
                let c = rows[i][j];
                if !c.is_finite() || c <= 0.0 {
                    return Err(AcoError::InvalidCostMatrix(format!(
                        "cost ({i}, {j}) must be positive and finite, got {c}"
                    )));
                }
                if rows[j][i] != c {
                    return Err(AcoError::InvalidCostMatrix(format!(
                        "cost ({i}, {j}) = {c} but ({j}, {i}) = {}",
                        rows[j][i]
                    )));
                }
            }
        }

        let mut costs = vec![0.0; n * n];
        for (i, row) in rows.iter().enumerate() {
            for (j, &c) in row.iter().enumerate() {
                if i != j {
                    costs[i * n + j] = c;
                }
            }
        }
        Ok(Self { n, costs })
    }

    /// Builds a matrix of `n` cities from a cost function.
    ///
    /// `f(i, j)` is only called for `i < j`; the result is mirrored.
    pub fn from_fn<F>(n: usize, mut f: F) -> Result<Self, AcoError>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut rows = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let c = f(i, j);
                rows[i][j] = c;
                rows[j][i] = c;
            }
        }
        Self::new(rows)
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always `false`: a matrix holds at least two cities.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Travel cost between two cities, `None` when `from == to`.
    ///
    /// # Panics
    /// Panics if either index is `>= len()`.
    pub fn cost(&self, from: usize, to: usize) -> Option<f64> {
        assert!(from < self.n && to < self.n, "city index out of range");
        if from == to {
            None
        } else {
            Some(self.costs[from * self.n + to])
        }
    }
}

/// A closed tour visiting every city exactly once.
///
/// The edge from the last city back to the first is implicit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct Tour {
    cities: Vec<usize>,
}

impl TryFrom<Vec<usize>> for Tour {
    type Error = AcoError;

    fn try_from(cities: Vec<usize>) -> Result<Self, Self::Error> {
        Tour::new(cities)
    }
}

impl From<Tour> for Vec<usize> {
    fn from(tour: Tour) -> Self {
        tour.cities
    }
}

impl Tour {
    /// Wraps a city sequence.
    ///
    /// # Errors
    ///
    /// [`AcoError::InvalidTour`] unless `cities` is a permutation of
    /// `0..cities.len()` with at least two cities.
    pub fn new(cities: Vec<usize>) -> Result<Self, AcoError> {
        let n = cities.len();
        if n < 2 {
            return Err(AcoError::InvalidTour(format!(
                "need at least 2 cities, got {n}"
            )));
        }
        let mut seen = vec![false; n];
        for &c in &cities {
            if c >= n {
                return Err(AcoError::InvalidTour(format!(
                    "city {c} out of range for {n} cities"
                )));
            }
            if seen[c] {
                return Err(AcoError::InvalidTour(format!("city {c} visited twice")));
            }
            seen[c] = true;
        }
        Ok(Self { cities })
    }

    /// Callers guarantee `cities` is a permutation.
    pub(crate) fn from_permutation(cities: Vec<usize>) -> Self {
        debug_assert!(Tour::new(cities.clone()).is_ok());
        Self { cities }
    }

    /// Cities in visiting order.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Always `false`: a tour holds at least two cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// First city of the tour.
    pub fn start(&self) -> usize {
        self.cities[0]
    }

    /// Directed edges in visiting order, ending with the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.cities.len();
        (0..n).map(move |k| (self.cities[k], self.cities[(k + 1) % n]))
    }

    /// Total cost of the cycle, closing edge included.
    ///
    /// # Panics
    /// Panics if the tour and the matrix disagree on the city count.
    pub fn cost(&self, matrix: &CostMatrix) -> f64 {
        assert_eq!(self.len(), matrix.len(), "tour/matrix size mismatch");
        // A self-edge has no cost entry; it counts as unreachable.
        self.edges()
            .map(|(a, b)| matrix.cost(a, b).unwrap_or(f64::INFINITY))
            .sum()
    }

    /// The same cycle rotated so that it starts at `city`.
    pub fn rotated_to(&self, city: usize) -> Result<Tour, AcoError> {
        let pos = self
            .cities
            .iter()
            .position(|&c| c == city)
            .ok_or(AcoError::CityOutOfRange {
                city,
                cities: self.len(),
            })?;
        let mut cities = self.cities.clone();
        cities.rotate_left(pos);
        Ok(Tour { cities })
    }

    /// The same cycle traversed in the opposite direction.
    pub fn reversed(&self) -> Tour {
        let mut cities = self.cities.clone();
        cities.reverse();
        Tour { cities }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn reference_matrix() -> CostMatrix {
        let inf = f64::INFINITY;
        CostMatrix::new(vec![
            vec![inf, 3.0, 1.0, 2.0],
            vec![3.0, inf, 5.0, 4.0],
            vec![1.0, 5.0, inf, 2.0],
            vec![2.0, 4.0, 2.0, inf],
        ])
        .unwrap()
    }

    #[test]
    fn test_cost_lookup() {
        let m = reference_matrix();
        assert_eq!(m.len(), 4);
        assert_eq!(m.cost(0, 1), Some(3.0));
        assert_eq!(m.cost(3, 2), Some(2.0));
        assert_eq!(m.cost(2, 3), Some(2.0));
        for i in 0..4 {
            assert_eq!(m.cost(i, i), None);
        }
    }

    #[test]
    fn test_rejects_too_small() {
        assert!(CostMatrix::new(vec![vec![0.0]]).is_err());
        assert!(CostMatrix::new(vec![]).is_err());
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let rows = vec![vec![0.0, 1.0], vec![1.0]];
        assert!(matches!(
            CostMatrix::new(rows),
            Err(AcoError::InvalidCostMatrix(_))
        ));
    }

    #[test]
    fn test_rejects_asymmetric() {
        let rows = vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![2.0, 4.0, 0.0],
        ];
        assert!(CostMatrix::new(rows).is_err());
    }

    #[test]
    fn test_rejects_unreachable_edge() {
        let inf = f64::INFINITY;
        let rows = vec![vec![inf, inf], vec![inf, inf]];
        assert!(CostMatrix::new(rows).is_err());

        let rows = vec![vec![0.0, 0.0], vec![0.0, 0.0]];
        assert!(CostMatrix::new(rows).is_err());

        let rows = vec![vec![0.0, -1.0], vec![-1.0, 0.0]];
        assert!(CostMatrix::new(rows).is_err());
    }

    #[test]
    fn test_from_fn_mirrors() {
        let m = CostMatrix::from_fn(5, |i, j| (i + j + 1) as f64).unwrap();
        for i in 0..5 {
            for j in 0..5 {
                assert_eq!(m.cost(i, j), m.cost(j, i));
            }
        }
        assert_eq!(m.cost(1, 3), Some(5.0));
    }

    #[test]
    fn test_tour_rejects_non_permutation() {
        assert!(Tour::new(vec![0, 1, 1]).is_err());
        assert!(Tour::new(vec![0, 3, 1]).is_err());
        assert!(Tour::new(vec![0]).is_err());
        assert!(Tour::new(vec![2, 0, 1]).is_ok());
    }

    #[test]
    fn test_tour_edges_include_closing() {
        let tour = Tour::new(vec![0, 2, 3, 1]).unwrap();
        let edges: Vec<_> = tour.edges().collect();
        assert_eq!(edges, vec![(0, 2), (2, 3), (3, 1), (1, 0)]);
    }

    #[test]
    fn test_tour_cost_reference() {
        let m = reference_matrix();
        let tour = Tour::new(vec![0, 2, 3, 1]).unwrap();
        assert!((tour.cost(&m) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_tour_cost_rotation_and_reversal() {
        let m = reference_matrix();
        let tour = Tour::new(vec![1, 0, 3, 2]).unwrap();
        let base = tour.cost(&m);
        for city in 0..4 {
            let rotated = tour.rotated_to(city).unwrap();
            assert_eq!(rotated.start(), city);
            assert!((rotated.cost(&m) - base).abs() < 1e-12);
            assert!((rotated.reversed().cost(&m) - base).abs() < 1e-12);
        }
    }

    #[test]
    fn test_try_from_checks_permutation() {
        assert!(Tour::try_from(vec![1, 1, 1, 1]).is_err());
        let tour = Tour::try_from(vec![3, 1, 0, 2]).unwrap();
        assert_eq!(Vec::from(tour), vec![3, 1, 0, 2]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_repeated_city() {
        assert!(serde_json::from_str::<Tour>("[1,1,1,1]").is_err());
        assert!(serde_json::from_str::<Tour>(r#"{"cities":[1,1,1,1]}"#).is_err());

        let tour = Tour::new(vec![0, 2, 3, 1]).unwrap();
        let json = serde_json::to_string(&tour).unwrap();
        assert_eq!(json, "[0,2,3,1]");
        let back: Tour = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tour);
        assert!((back.cost(&reference_matrix()) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotated_to_unknown_city() {
        let tour = Tour::new(vec![0, 1, 2]).unwrap();
        assert!(matches!(
            tour.rotated_to(7),
            Err(AcoError::CityOutOfRange { city: 7, cities: 3 })
        ));
    }
}
