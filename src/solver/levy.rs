//! Heavy-tailed step sampler via Mantegna's algorithm.
//!
//! Draws from a symmetric alpha-stable (Lévy) distribution with
//! stability parameter beta in (0, 2]. Most draws are small; rare draws
//! are very large. The construction phase consumes only the absolute
//! value of a sample, turning those rare draws into long-range jumps.
//!
//! Reference: Mantegna (1994), "Fast, accurate algorithm for numerical
//! simulation of Lévy stable stochastic processes".

use crate::error::{TspError, TspResult};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use statrs::function::gamma::gamma;
use std::f64::consts::PI;

/// Guard against division by zero when the denominator draw is
/// extremely close to zero.
const DENOM_GUARD: f64 = 1e-16;

/// Sampler for a symmetric alpha-stable distribution.
///
/// Stateless apart from the caller-supplied random source; the Mantegna
/// scale `sigma_u` is fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct LevySampler {
    beta: f64,
    sigma_u: f64,
    step: Normal<f64>,
    unit: Normal<f64>,
}

impl LevySampler {
    /// Create a sampler with stability parameter `beta`.
    ///
    /// `sigma_u = (Γ(1+β)·sin(πβ/2) / (Γ((1+β)/2)·β·2^((β−1)/2)))^(1/β)`
    pub fn new(beta: f64) -> TspResult<Self> {
        if !(beta > 0.0 && beta <= 2.0) {
            return Err(TspError::InvalidParameter {
                param: "levy_beta".into(),
                value: beta.to_string(),
                constraint: "stability parameter must lie in (0, 2]".into(),
            });
        }

        let num = gamma(1.0 + beta) * (PI * beta / 2.0).sin();
        let den = gamma((1.0 + beta) / 2.0) * beta * 2.0_f64.powf((beta - 1.0) / 2.0);
        let sigma_u = (num / den).powf(1.0 / beta);

        let invalid_scale = |_| TspError::InvalidParameter {
            param: "levy_beta".into(),
            value: beta.to_string(),
            constraint: "must yield a finite positive Mantegna scale".into(),
        };
        let step = Normal::new(0.0, sigma_u).map_err(invalid_scale)?;
        let unit = Normal::new(0.0, 1.0).map_err(invalid_scale)?;

        Ok(Self {
            beta,
            sigma_u,
            step,
            unit,
        })
    }

    /// The precomputed Mantegna scale for the numerator draw
    #[must_use]
    pub fn sigma_u(&self) -> f64 {
        self.sigma_u
    }

    /// Draw one step length: `u / (|v|^(1/β) + ε)` with
    /// `u ~ N(0, σ_u)` and `v ~ N(0, 1)`, consumed in that order.
    ///
    /// The sign is meaningful but tour construction only ever uses the
    /// absolute value.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u = self.step.sample(rng);
        let v = self.unit.sample(rng);
        u / (v.abs().powf(1.0 / self.beta) + DENOM_GUARD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn test_rejects_beta_out_of_domain() {
        assert!(LevySampler::new(0.0).is_err());
        assert!(LevySampler::new(-1.0).is_err());
        assert!(LevySampler::new(2.1).is_err());
        assert!(LevySampler::new(2.0).is_ok());
        assert!(LevySampler::new(0.5).is_ok());
    }

    #[test]
    fn test_sigma_u_for_default_beta() {
        // Closed-form value for beta = 1.5
        let sampler = LevySampler::new(1.5).expect("valid beta");
        assert!((sampler.sigma_u() - 0.696575).abs() < 1e-3);
    }

    #[test]
    fn test_samples_are_finite() {
        let sampler = LevySampler::new(1.5).expect("valid beta");
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(sampler.sample(&mut rng).is_finite());
        }
    }

    #[test]
    fn test_heavier_tail_than_normal() {
        // Fraction of |draws| beyond 5x the median should be markedly
        // larger than a normal's (which is below 0.1% at that point).
        let sampler = LevySampler::new(1.5).expect("valid beta");
        let mut rng = StdRng::seed_from_u64(42);

        let mut magnitudes: Vec<f64> = (0..20_000).map(|_| sampler.sample(&mut rng).abs()).collect();
        magnitudes.sort_by(|a, b| a.partial_cmp(b).expect("finite"));
        let median = magnitudes[magnitudes.len() / 2];

        let tail = magnitudes.iter().filter(|&&m| m > 5.0 * median).count();
        let fraction = tail as f64 / magnitudes.len() as f64;
        assert!(
            fraction > 0.01,
            "tail fraction {fraction} not heavier than normal"
        );
    }

    #[test]
    fn test_deterministic_with_seeded_rng() {
        let sampler = LevySampler::new(1.5).expect("valid beta");
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        for _ in 0..100 {
            assert_eq!(sampler.sample(&mut rng1), sampler.sample(&mut rng2));
        }
    }
}
