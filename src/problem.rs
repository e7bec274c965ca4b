use std::ops::Range;

use rand::Rng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

pub const DEFAULT_POINTS: usize = 30;

/// Domain the x coordinates are drawn from, upper bound excluded.
pub const X_RANGE: Range<f64> = -5.5..5.7;

const LATENT_RANGE: Range<f64> = -1.0..1.0;
const NOISE_RANGE: Range<f64> = -1.0..1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub type Dataset = Vec<DataPoint>;

/// Where the "true" line behind each sample comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LatentLine {
    /// A fresh slope and intercept for every point.
    #[default]
    PerPoint,
    /// One slope and intercept shared by the whole dataset.
    Shared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    pub points: usize,
    pub latent: LatentLine,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            points: DEFAULT_POINTS,
            latent: LatentLine::PerPoint,
        }
    }
}

impl Generator {
    /// Draws a new dataset. Every sample is
    /// `y = latent_intercept + latent_slope * x + noise`.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Dataset {
        let x_dist = Uniform::new(X_RANGE.start, X_RANGE.end);
        let latent = Uniform::new(LATENT_RANGE.start, LATENT_RANGE.end);
        let noise = Uniform::new(NOISE_RANGE.start, NOISE_RANGE.end);

        let shared = match self.latent {
            LatentLine::Shared => Some((latent.sample(rng), latent.sample(rng))),
            LatentLine::PerPoint => None,
        };

        (0..self.points)
            .map(|_| {
                let x = x_dist.sample(rng);

                let (slope, intercept) = match shared {
                    Some(line) => line,
                    None => (latent.sample(rng), latent.sample(rng)),
                };

                let y = intercept + slope * x + noise.sample(rng);

                DataPoint { x, y }
            })
            .collect()
    }
}

pub fn generate<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Dataset {
    Generator {
        points: n,
        latent: LatentLine::PerPoint,
    }
    .generate(rng)
}
