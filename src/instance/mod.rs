//! TSP instance representation.
//!
//! A [`TspInstance`] owns the city coordinates and the precomputed
//! pairwise distance matrix. Both are immutable after construction;
//! everything downstream (pheromone field, tour construction) reads
//! them through this type.

mod tsplib;

pub use tsplib::TsplibParser;

use crate::error::{TspError, TspResult};
use std::path::Path;

/// A Euclidean TSP instance.
///
/// City identity is positional: city `i` is `coords[i]`, and every tour
/// is a permutation of `0..dimension`. The distance matrix is symmetric
/// with an infinite diagonal — the "no self-edge" sentinel that also
/// zeroes the corresponding heuristic desirability.
#[derive(Debug, Clone)]
pub struct TspInstance {
    /// Instance name (from the file header, or the file stem)
    pub name: String,
    /// Number of cities
    pub dimension: usize,
    /// City coordinates, 0-indexed
    pub coords: Vec<(f64, f64)>,
    /// Pairwise Euclidean distances; `INFINITY` on the diagonal
    pub distances: Vec<Vec<f64>>,
}

impl TspInstance {
    /// Build an instance from raw coordinates.
    ///
    /// Fails with [`TspError::EmptyInstance`] for an empty coordinate
    /// list. A single city constructs fine here and is rejected later,
    /// at pheromone initialization.
    pub fn from_coords(name: &str, coords: Vec<(f64, f64)>) -> TspResult<Self> {
        if coords.is_empty() {
            return Err(TspError::EmptyInstance);
        }

        let n = coords.len();
        let mut distances = vec![vec![f64::INFINITY; n]; n];
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    let dx = coords[i].0 - coords[j].0;
                    let dy = coords[i].1 - coords[j].1;
                    distances[i][j] = dx.hypot(dy);
                }
            }
        }

        Ok(Self {
            name: name.to_string(),
            dimension: n,
            coords,
            distances,
        })
    }

    /// Load an instance from a TSPLIB-style file.
    pub fn load(path: &Path) -> TspResult<Self> {
        if !path.exists() {
            return Err(TspError::FileNotFound(path.to_path_buf()));
        }
        TsplibParser::parse_file(path)
    }

    /// Number of cities
    #[must_use]
    pub fn num_cities(&self) -> usize {
        self.dimension
    }

    /// Distance between cities `i` and `j` (`INFINITY` when `i == j`)
    #[must_use]
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.distances[i][j]
    }

    /// Minimum finite distance from city `i` to any other city.
    ///
    /// `INFINITY` when no other city exists (n = 1).
    #[must_use]
    pub fn nearest_distance(&self, i: usize) -> f64 {
        self.distances[i]
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min)
    }

    /// Cyclic tour cost: consecutive edges plus the closing edge from
    /// the last city back to the first.
    #[must_use]
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        let n = tour.len();
        (0..n)
            .map(|k| self.distances[tour[k]][tour[(k + 1) % n]])
            .sum()
    }

    /// Check that `tour` is a permutation of `{0, .., dimension-1}`.
    pub fn validate_tour(&self, tour: &[usize]) -> TspResult<()> {
        if tour.len() != self.dimension {
            return Err(TspError::InvalidTour {
                cause: format!(
                    "expected {} cities, tour has {}",
                    self.dimension,
                    tour.len()
                ),
            });
        }

        let mut seen = vec![false; self.dimension];
        for &city in tour {
            if city >= self.dimension {
                return Err(TspError::InvalidTour {
                    cause: format!("city index {city} out of range"),
                });
            }
            if seen[city] {
                return Err(TspError::InvalidTour {
                    cause: format!("city {city} visited twice"),
                });
            }
            seen[city] = true;
        }

        Ok(())
    }
}
