use log::debug;
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal, Uniform};

use crate::error::{Error, Result};

/// Parameters of the synthetic cubic data set.
#[derive(Clone, Debug, PartialEq)]
pub struct CubicConfig {
    pub n_samples: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub noise_std: f64,
    pub seed: u64,
}

impl Default for CubicConfig {
    fn default() -> Self {
        Self {
            n_samples: 100,
            x_min: -1.4,
            x_max: 1.4,
            noise_std: 0.3,
            seed: 0,
        }
    }
}

/// Paired inputs and targets.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    x: Array1<f64>,
    y: Array1<f64>,
}

impl Dataset {
    pub fn new(x: Array1<f64>, y: Array1<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::ShapeMismatch {
                what: "targets",
                got: y.len(),
                expected: x.len(),
            });
        }

        Ok(Self { x, y })
    }

    pub fn x(&self) -> &Array1<f64> {
        &self.x
    }

    pub fn y(&self) -> &Array1<f64> {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + Clone + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Noiseless part of the target: `x^3 - 0.5 x^2`.
pub fn cubic_trend(x: f64) -> f64 {
    x.powi(3) - 0.5 * x.powi(2)
}

/// Draws `n_samples` inputs uniformly from `[x_min, x_max)`, then one noise
/// value per sample, and returns `y = cubic_trend(x) + noise`.
///
/// All inputs are sampled before any noise, so for a fixed seed the inputs do
/// not depend on `noise_std`.
pub fn generate_cubic(config: &CubicConfig) -> Result<Dataset> {
    let CubicConfig {
        n_samples,
        x_min,
        x_max,
        noise_std,
        seed,
    } = *config;

    if !x_min.is_finite() || !x_max.is_finite() {
        return Err(Error::InvalidInput("x bounds must be finite"));
    }
    if x_min >= x_max {
        return Err(Error::InvalidInput("x_min must be below x_max"));
    }
    if !(x_max - x_min).is_finite() {
        return Err(Error::InvalidInput("x range overflows"));
    }

    let noise = Normal::new(0., noise_std)?;
    let uniform = Uniform::new(x_min, x_max);

    let mut rng = StdRng::seed_from_u64(seed);

    let x: Array1<f64> = uniform.sample_iter(&mut rng).take(n_samples).collect();
    let y: Array1<f64> = x
        .iter()
        .zip(noise.sample_iter(&mut rng))
        .map(|(&x, eps)| cubic_trend(x) + eps)
        .collect();

    debug!(
        "generated {} cubic samples in [{x_min}, {x_max}) with noise std {noise_std}, seed {seed}",
        x.len()
    );

    Dataset::new(x, y)
}
