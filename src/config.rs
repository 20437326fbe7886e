use std::path::PathBuf;

use clap::{Args, Parser};

use crate::dataset::CubicConfig;
use crate::linear::LinearModel;

/// Flags describing the synthetic data set. Defaults reproduce the exercise.
#[derive(Args, Clone, Debug)]
pub struct DataArgs {
    #[arg(long, default_value_t = 100)]
    pub n_samples: usize,

    #[arg(long, default_value_t = -1.4, allow_negative_numbers = true)]
    pub x_min: f64,

    #[arg(long, default_value_t = 1.4, allow_negative_numbers = true)]
    pub x_max: f64,

    #[arg(long, default_value_t = 0.3)]
    pub noise_std: f64,

    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

impl DataArgs {
    pub fn cubic_config(&self) -> CubicConfig {
        CubicConfig {
            n_samples: self.n_samples,
            x_min: self.x_min,
            x_max: self.x_max,
            noise_std: self.noise_std,
            seed: self.seed,
        }
    }
}

/// Fit a line to noisy cubic data, by hand and by least squares.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct ExerciseArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Weight of the hand picked model.
    #[arg(long, default_value_t = 0., allow_negative_numbers = true)]
    pub weight: f64,

    /// Intercept of the hand picked model.
    #[arg(long, default_value_t = 0., allow_negative_numbers = true)]
    pub intercept: f64,

    #[arg(long, default_value = "plots/linear_models_ex_02.svg")]
    pub plot_path: PathBuf,

    #[arg(long)]
    pub no_plot: bool,
}

impl ExerciseArgs {
    pub fn cubic_config(&self) -> CubicConfig {
        self.data.cubic_config()
    }

    pub fn manual_model(&self) -> LinearModel {
        LinearModel::new(self.weight, self.intercept)
    }
}

/// Sweep a grid of hand picked models over noisy cubic data.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct SweepArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[arg(long, default_value_t = -1., allow_negative_numbers = true)]
    pub weight_min: f64,

    #[arg(long, default_value_t = 3., allow_negative_numbers = true)]
    pub weight_max: f64,

    #[arg(long, default_value_t = -1., allow_negative_numbers = true)]
    pub intercept_min: f64,

    #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
    pub intercept_max: f64,

    /// Grid points per parameter.
    #[arg(long, default_value_t = 41)]
    pub steps: usize,

    /// Number of best candidates to print.
    #[arg(long, default_value_t = 5)]
    pub top: usize,

    #[arg(long, default_value = "plots/parameter_sweep.svg")]
    pub plot_path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn defaults_reproduce_exercise() {
        let args = ExerciseArgs::try_parse_from(["linear_models_ex_02"]).unwrap();

        assert_eq!(args.cubic_config(), CubicConfig::default());
        assert_eq!(args.manual_model(), LinearModel::default());
        assert!(!args.no_plot);
        assert_eq!(args.plot_path, PathBuf::from("plots/linear_models_ex_02.svg"));
    }

    #[test]
    fn negative_values_parse() {
        let args = ExerciseArgs::try_parse_from([
            "linear_models_ex_02",
            "--weight",
            "1.2",
            "--intercept",
            "-0.4",
            "--x-min",
            "-2",
            "--seed",
            "7",
            "--no-plot",
        ])
        .unwrap();

        assert_eq!(args.manual_model(), LinearModel::new(1.2, -0.4));
        assert_abs_diff_eq!(args.cubic_config().x_min, -2.);
        assert_eq!(args.cubic_config().seed, 7);
        assert!(args.no_plot);
    }

    #[test]
    fn sweep_defaults() {
        let args = SweepArgs::try_parse_from(["parameter_sweep", "--steps", "11"]).unwrap();

        assert_eq!(args.steps, 11);
        assert_eq!(args.top, 5);
        assert_eq!(args.data.cubic_config(), CubicConfig::default());
    }

    #[test]
    fn rejects_unknown_flag() {
        assert!(ExerciseArgs::try_parse_from(["linear_models_ex_02", "--slope", "1"]).is_err());
    }
}
