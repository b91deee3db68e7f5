//! hormiga-tsp: Lévy-flight ant colony optimization for the Euclidean TSP.
//!
//! Approximates low-cost Hamiltonian cycles over a set of 2D points with
//! a hybrid metaheuristic: classic pheromone-guided tour construction
//! (Ant System with an elitist deposit on the best-known tour) augmented
//! by heavy-tailed Lévy-flight jumps that occasionally pull an ant
//! toward a far-away unvisited city, escaping local stagnation.
//!
//! # Quick Start
//!
//! ```
//! use hormiga_tsp::{Budget, LevyAcoSolver, TspInstance, TspSolver};
//!
//! // Four cities on a unit square; the optimal cycle is the perimeter.
//! let coords = vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)];
//! let instance = TspInstance::from_coords("square", coords).unwrap();
//!
//! let mut solver = LevyAcoSolver::new().with_seed(42).with_ants(10);
//! let solution = solver.solve(&instance, Budget::Iterations(50)).unwrap();
//!
//! assert!(instance.validate_tour(&solution.tour).is_ok());
//! assert!((solution.length - 4.0).abs() < 1e-9);
//! ```
//!
//! # Modules
//!
//! - [`instance`]: city coordinates, distance matrix, TSPLIB loading
//! - [`solver`]: the Lévy-ACO engine, pheromone field, Lévy sampler
//! - [`plot`]: SVG rendering of a tour
//! - [`error`]: error types

pub mod error;
pub mod instance;
pub mod plot;
pub mod solver;

pub use error::{TspError, TspResult};
pub use instance::{TspInstance, TsplibParser};
pub use solver::{
    Budget, LevyAcoSolver, LevySampler, PheromoneField, TspSolution, TspSolver, PHEROMONE_FLOOR,
};
