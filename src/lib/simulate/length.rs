//! Target length model for simulated sequences.
//!
//! Each simulated sequence draws its target length once from a normal
//! distribution. Draws are rounded and clamped to a floor (the k-mer length), so a
//! wide spread around a small mean can never produce a zero or negative length.

use crate::errors::{Result, SimulationError};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Fraction of the mean used as the standard deviation when sizing by kilobases.
pub const DEFAULT_STDDEV_FRACTION: f64 = 0.10;

/// Normal target-length distribution with a hard floor.
///
/// # Examples
///
/// ```
/// use genomesim_lib::simulate::TargetLengthModel;
/// use genomesim_lib::simulate::create_rng;
///
/// // 100 kb mean with a 10 kb standard deviation
/// let model = TargetLengthModel::from_size_kb(100.0, 3).unwrap();
/// let mut rng = create_rng(Some(42));
///
/// let length = model.sample(&mut rng);
/// assert!(length >= 3);
/// ```
#[derive(Debug, Clone)]
pub struct TargetLengthModel {
    /// Mean target length in bases
    pub mean: f64,
    /// Standard deviation of the target length
    pub stddev: f64,
    /// Smallest length ever returned (normally the k-mer length)
    pub min: usize,
    normal: Normal<f64>,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
impl TargetLengthModel {
    /// Create a model from an explicit mean and standard deviation.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] if the mean is negative or not
    /// finite, or if the standard deviation is negative or not finite.
    pub fn new(mean: f64, stddev: f64, min: usize) -> Result<Self> {
        if !mean.is_finite() || mean < 0.0 {
            return Err(SimulationError::invalid_parameter(
                "length-mean",
                format!("must be a finite value >= 0, got {mean}"),
            ));
        }
        if !stddev.is_finite() || stddev < 0.0 {
            return Err(SimulationError::invalid_parameter(
                "length-stddev",
                format!("must be a finite value >= 0, got {stddev}"),
            ));
        }
        let normal = Normal::new(mean, stddev).map_err(|e| {
            SimulationError::invalid_parameter("length-stddev", format!("{e}"))
        })?;
        Ok(Self { mean, stddev, min, normal })
    }

    /// Create a model with mean `size_kb * 1000` and a standard deviation of 10% of the mean.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] if `size_kb` is negative or not finite.
    pub fn from_size_kb(size_kb: f64, min: usize) -> Result<Self> {
        let mean = size_kb * 1000.0;
        Self::new(mean, mean * DEFAULT_STDDEV_FRACTION, min)
    }

    /// Draw a target length, rounded and clamped to at least `min`.
    pub fn sample(&self, rng: &mut impl Rng) -> usize {
        let draw = self.normal.sample(rng).round();
        if draw <= self.min as f64 { self.min } else { draw as usize }
    }
}
