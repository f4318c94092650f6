//! Bounded random perturbation of probability vectors.
//!
//! Every entry receives an independent uniform draw from `[-r, r]`, then the vector
//! is renormalized to sum to 1. Perturbation can push an entry below zero; what
//! happens then is decided by a [`NegativeProbabilityPolicy`].

use crate::errors::{Result, SimulationError};
use clap::ValueEnum;
use rand::Rng;
use rand::distr::{Distribution, Uniform};
use std::fmt;

/// How to treat a perturbed probability that went negative before renormalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum NegativeProbabilityPolicy {
    /// Set negative values to zero; the k-mer can then never be drawn
    #[default]
    Clamp,
    /// Fail with [`SimulationError::NegativeProbability`]
    Reject,
}

impl fmt::Display for NegativeProbabilityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clamp => write!(f, "clamp"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

/// Adds uniform noise in `[-randomness, randomness]` to each probability and renormalizes.
///
/// With `randomness == 0` the input is returned unchanged and no random numbers are
/// drawn.
///
/// # Errors
///
/// * [`SimulationError::InvalidParameter`] if `randomness` is negative, not finite, or
///   so large that the noise range `[-randomness, randomness]` cannot be sampled
/// * [`SimulationError::NegativeProbability`] under [`NegativeProbabilityPolicy::Reject`]
///   when an entry goes negative
/// * [`SimulationError::DegenerateDistribution`] if the perturbed values sum to zero
///
/// # Examples
///
/// ```
/// use genomesim_lib::simulate::{NegativeProbabilityPolicy, create_rng, perturb};
///
/// let probs = vec![0.5, 0.3, 0.2];
/// let mut rng = create_rng(Some(42));
///
/// let same = perturb(&probs, 0.0, NegativeProbabilityPolicy::Clamp, &mut rng).unwrap();
/// assert_eq!(same, probs);
///
/// let noisy = perturb(&probs, 0.05, NegativeProbabilityPolicy::Clamp, &mut rng).unwrap();
/// assert!((noisy.iter().sum::<f64>() - 1.0).abs() < 1e-9);
/// ```
pub fn perturb(
    probabilities: &[f64],
    randomness: f64,
    policy: NegativeProbabilityPolicy,
    rng: &mut impl Rng,
) -> Result<Vec<f64>> {
    if !randomness.is_finite() || randomness < 0.0 {
        return Err(SimulationError::invalid_parameter(
            "randomness",
            format!("must be a finite value >= 0, got {randomness}"),
        ));
    }
    if randomness == 0.0 {
        return Ok(probabilities.to_vec());
    }

    let noise = Uniform::new_inclusive(-randomness, randomness).map_err(|e| {
        SimulationError::invalid_parameter(
            "randomness",
            format!("cannot draw noise in [-{randomness}, {randomness}]: {e}"),
        )
    })?;

    let mut perturbed = Vec::with_capacity(probabilities.len());
    for (index, &p) in probabilities.iter().enumerate() {
        let value = p + noise.sample(rng);
        if value < 0.0 {
            match policy {
                NegativeProbabilityPolicy::Clamp => perturbed.push(0.0),
                NegativeProbabilityPolicy::Reject => {
                    return Err(SimulationError::NegativeProbability { index, value });
                }
            }
        } else {
            perturbed.push(value);
        }
    }

    normalize(&mut perturbed)?;
    Ok(perturbed)
}

/// Divides every value by the vector's sum.
///
/// # Errors
///
/// Returns [`SimulationError::DegenerateDistribution`] if the sum is zero or not finite.
pub fn normalize(values: &mut [f64]) -> Result<()> {
    let total: f64 = values.iter().sum();
    if total == 0.0 || !total.is_finite() {
        return Err(SimulationError::DegenerateDistribution {
            reason: format!("cannot renormalize {} values summing to {total}", values.len()),
        });
    }
    for v in values.iter_mut() {
        *v /= total;
    }
    Ok(())
}
