use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{PlaygroundError, Result};
use crate::presentation::ChartAxes;
use crate::problem::{Generator, LatentLine, DEFAULT_POINTS};

/// Command line options shared by every binary.
#[derive(clap::Args, Debug, Clone)]
pub struct ProblemArgs {
    /// Number of points in each generated problem.
    #[clap(short, long, default_value_t = DEFAULT_POINTS)]
    pub points: usize,

    /// Seed for reproducible problems.
    #[clap(short, long)]
    pub seed: Option<u64>,

    /// Directory downloads and snapshots are saved into.
    #[clap(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// How the true line behind each point is drawn.
    #[clap(long, value_enum, default_value_t = LatentLine::PerPoint)]
    pub latent: LatentLine,

    /// Lower bound of the chart's y axis.
    #[clap(long, default_value_t = -7.0, allow_hyphen_values = true)]
    pub y_min: f64,

    /// Upper bound of the chart's y axis.
    #[clap(long, default_value_t = 7.0, allow_hyphen_values = true)]
    pub y_max: f64,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub generator: Generator,
    pub axes: ChartAxes,
    pub output_dir: PathBuf,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            generator: Generator::default(),
            axes: ChartAxes::default(),
            output_dir: PathBuf::from("."),
            seed: None,
        }
    }
}

impl Settings {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl TryFrom<ProblemArgs> for Settings {
    type Error = PlaygroundError;

    fn try_from(args: ProblemArgs) -> Result<Self> {
        if !args.y_min.is_finite() || !args.y_max.is_finite() {
            return Err(PlaygroundError::Config(format!(
                "y range must be finite: {} .. {}",
                args.y_min, args.y_max
            )));
        }

        if args.y_min >= args.y_max {
            return Err(PlaygroundError::Config(format!(
                "y range is empty: {} .. {}",
                args.y_min, args.y_max
            )));
        }

        Ok(Settings {
            generator: Generator {
                points: args.points,
                latent: args.latent,
            },
            axes: ChartAxes {
                y: args.y_min..args.y_max,
                ..ChartAxes::default()
            },
            output_dir: args.output_dir,
            seed: args.seed,
        })
    }
}
