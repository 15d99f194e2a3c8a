//! Litter-size distributions for sexual reproduction.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::config::ConfigError;

/// How many offspring one successful mating produces.
#[derive(Clone, Debug)]
pub enum OffspringDistribution {
    /// Outcome `i + 1` with probability proportional to `weights[i]`.
    Weighted {
        /// Relative weights for 1, 2, 3, ... offspring.
        weights: Vec<f64>,
        /// Sampler built from `weights`.
        index: WeightedIndex<f64>,
    },
    /// A normal draw truncated at zero and floored.
    TruncatedNormal {
        /// Mean of the untruncated normal.
        mean: f64,
        /// Standard deviation of the untruncated normal.
        std_dev: f64,
    },
}

impl OffspringDistribution {
    /// Weighted choice over `1..=weights.len()`.
    pub fn weighted(key: &str, weights: &[f64]) -> Result<Self, ConfigError> {
        let index =
            WeightedIndex::new(weights.iter().copied()).map_err(|e| ConfigError::InvalidParameter {
                key: key.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self::Weighted {
            weights: weights.to_vec(),
            index,
        })
    }

    /// `floor(max(N(mean, std_dev), 0))`.
    pub fn truncated_normal(mean: f64, std_dev: f64) -> Self {
        Self::TruncatedNormal { mean, std_dev }
    }

    /// Draw one litter size.
    pub fn sample(&self, rng: &mut ChaCha8Rng) -> u32 {
        match self {
            Self::Weighted { index, .. } => index.sample(rng) as u32 + 1,
            Self::TruncatedNormal { mean, std_dev } => {
                let x = mean + std_dev * box_muller(rng);
                x.max(0.0).floor() as u32
            }
        }
    }

    /// Analytic mean of [`sample`](Self::sample).
    pub fn expected_value(&self) -> f64 {
        match self {
            Self::Weighted { weights, .. } => {
                let total: f64 = weights.iter().sum();
                weights
                    .iter()
                    .enumerate()
                    .map(|(i, w)| (i + 1) as f64 * w)
                    .sum::<f64>()
                    / total
            }
            Self::TruncatedNormal { mean, std_dev } => {
                if *std_dev <= 0.0 {
                    return mean.max(0.0).floor();
                }
                // E[floor(max(X, 0))] = sum over k >= 1 of P(X >= k).
                let mut sum = 0.0;
                let mut k = 1.0;
                loop {
                    let tail = normal_tail((k - mean) / std_dev);
                    if tail < 1e-12 {
                        break;
                    }
                    sum += tail;
                    k += 1.0;
                }
                sum
            }
        }
    }
}

/// Standard normal variate via the Box-Muller transform.
fn box_muller(rng: &mut ChaCha8Rng) -> f64 {
    let u1: f64 = rng.random::<f64>().max(1e-300);
    let u2: f64 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// `P(Z >= z)` for a standard normal `Z`.
fn normal_tail(z: f64) -> f64 {
    0.5 * erfc(z / std::f64::consts::SQRT_2)
}

/// Complementary error function, Abramowitz and Stegun 7.1.26
/// (absolute error below 1.5e-7).
fn erfc(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    let t = 1.0 / (1.0 + 0.327_591_1 * x);
    let poly = t
        * (0.254_829_592
            + t * (-0.284_496_736 + t * (1.421_413_741 + t * (-1.453_152_027 + t * 1.061_405_429))));
    let erf = 1.0 - poly * (-x * x).exp();
    1.0 - sign * erf
}
