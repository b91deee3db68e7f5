//! Pheromone and heuristic desirability matrices.
//!
//! The pheromone matrix is the only mutable state shared across an
//! optimization run. Construction reads it; reinforcement at the end of
//! each iteration is the sole writer. Keeping both phases behind this
//! type makes that two-phase discipline explicit.

use crate::error::{TspError, TspResult};
use crate::instance::TspInstance;

/// Lower bound applied to every pheromone entry after evaporation.
///
/// An entry that reached zero would permanently forbid its edge.
pub const PHEROMONE_FLOOR: f64 = 1e-12;

/// Mutable pheromone matrix (τ) plus the static inverse-distance
/// heuristic matrix (η) derived from the instance.
#[derive(Debug, Clone)]
pub struct PheromoneField {
    n: usize,
    tau0: f64,
    tau: Vec<Vec<f64>>,
    eta: Vec<Vec<f64>>,
}

impl PheromoneField {
    /// Initialize the field for an instance.
    ///
    /// Every τ entry starts at `τ0 = 1 / (n · mean(min finite distance
    /// per row))`. Rows without a finite minimum are excluded from the
    /// mean; if no row has one (n <= 1) the instance cannot seed a
    /// pheromone scale and is rejected with
    /// [`TspError::DegenerateInstance`].
    pub fn new(instance: &TspInstance) -> TspResult<Self> {
        let n = instance.num_cities();

        let eta = instance
            .distances
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&d| if d.is_finite() { 1.0 / d } else { 0.0 })
                    .collect()
            })
            .collect();

        let row_mins: Vec<f64> = (0..n)
            .map(|i| instance.nearest_distance(i))
            .filter(|m| m.is_finite())
            .collect();
        if row_mins.is_empty() {
            return Err(TspError::DegenerateInstance);
        }
        let mean_min = row_mins.iter().sum::<f64>() / row_mins.len() as f64;
        let tau0 = 1.0 / (n as f64 * mean_min);

        // The diagonal shares tau0 and decays with the rest; it is
        // never selected because its heuristic value is zero.
        let tau = vec![vec![tau0; n]; n];

        Ok(Self { n, tau0, tau, eta })
    }

    /// Initial pheromone level τ0
    #[must_use]
    pub fn initial_pheromone(&self) -> f64 {
        self.tau0
    }

    /// Pheromone level on the directed edge a -> b
    #[must_use]
    pub fn tau(&self, a: usize, b: usize) -> f64 {
        self.tau[a][b]
    }

    /// Heuristic desirability of the edge a -> b (inverse distance)
    #[must_use]
    pub fn eta(&self, a: usize, b: usize) -> f64 {
        self.eta[a][b]
    }

    /// Decay every entry by `(1 - rho)`, clamping at the floor.
    ///
    /// `rho` outside (0, 1) is accepted but degrades convergence; it is
    /// a tuning concern, not a validation concern.
    pub fn evaporate(&mut self, rho: f64) {
        for row in &mut self.tau {
            for entry in row.iter_mut() {
                *entry *= 1.0 - rho;
                if *entry < PHEROMONE_FLOOR {
                    *entry = PHEROMONE_FLOOR;
                }
            }
        }
    }

    /// Add `amount` to the directed edge a -> b.
    ///
    /// Deposits are directional: the reverse edge is untouched even
    /// though the underlying graph is undirected. A tour is an ordered
    /// sequence and is reinforced as one.
    pub fn deposit(&mut self, a: usize, b: usize, amount: f64) {
        self.tau[a][b] += amount;
    }

    /// One reinforcement cycle: evaporate, deposit `1/cost` along every
    /// completed tour, then `elitist_weight / best_cost` along the best
    /// tour when one is known. The ordering is load-bearing.
    ///
    /// Tours with a non-finite or non-positive cost deposit nothing.
    pub fn reinforce(
        &mut self,
        rho: f64,
        tours: &[(Vec<usize>, f64)],
        best: Option<(&[usize], f64)>,
        elitist_weight: f64,
    ) {
        self.evaporate(rho);

        for (tour, cost) in tours {
            if !(*cost > 0.0 && cost.is_finite()) {
                continue;
            }
            self.deposit_along(tour, 1.0 / cost);
        }

        if let Some((best_tour, best_cost)) = best {
            if best_cost > 0.0 && best_cost.is_finite() {
                self.deposit_along(best_tour, elitist_weight / best_cost);
            }
        }
    }

    fn deposit_along(&mut self, tour: &[usize], amount: f64) {
        let len = tour.len();
        for k in 0..len {
            let a = tour[k];
            let b = tour[(k + 1) % len];
            self.deposit(a, b, amount);
        }
    }

    /// Matrix dimension
    #[must_use]
    pub fn num_cities(&self) -> usize {
        self.n
    }
}
