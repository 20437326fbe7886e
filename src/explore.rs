use std::fmt;

use itertools::iproduct;
use ndarray::Array1;

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::linear::LinearModel;
use crate::metrics::mean_squared_error;

/// A model together with its training error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub model: LinearModel,
    pub mse: f64,
}

pub fn evaluate(dataset: &Dataset, model: LinearModel) -> Result<Candidate> {
    let predictions = model.predict_array(dataset.x());
    let mse = mean_squared_error(dataset.y(), &predictions)?;

    Ok(Candidate { model, mse })
}

/// Scores every `(weight, intercept)` pair, best first.
pub fn grid_search(
    dataset: &Dataset,
    weights: &[f64],
    intercepts: &[f64],
) -> Result<Vec<Candidate>> {
    if weights.is_empty() || intercepts.is_empty() {
        return Err(Error::InvalidInput("parameter grid is empty"));
    }

    let mut candidates = iproduct!(weights, intercepts)
        .map(|(&w, &b)| evaluate(dataset, LinearModel::new(w, b)))
        .collect::<Result<Vec<_>>>()?;

    candidates.sort_by(|a, b| a.mse.total_cmp(&b.mse));

    Ok(candidates)
}

/// `steps` evenly spaced values from `start` to `end` inclusive.
pub fn linspace_grid(start: f64, end: f64, steps: usize) -> Vec<f64> {
    Array1::linspace(start, end, steps).to_vec()
}

/// The learner's pick against the least squares fit.
#[derive(Clone, Copy, Debug)]
pub struct Comparison {
    pub manual: Candidate,
    pub fitted: Candidate,
}

impl Comparison {
    pub fn improvement(&self) -> f64 {
        self.manual.mse - self.fitted.mse
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "manual: {} (mse {:.4})", self.manual.model, self.manual.mse)?;
        writeln!(f, "fitted: {} (mse {:.4})", self.fitted.model, self.fitted.mse)?;
        write!(f, "mse improvement: {:.4}", self.improvement())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{generate_cubic, CubicConfig};
    use approx::assert_relative_eq;
    use ndarray::array;

    fn line_data() -> Dataset {
        Dataset::new(array![0., 1., 2.], array![1., 3., 5.]).unwrap()
    }

    #[test]
    fn evaluate_exact_model() {
        let candidate = evaluate(&line_data(), LinearModel::new(2., 1.)).unwrap();
        assert_relative_eq!(candidate.mse, 0.);
    }

    #[test]
    fn default_model_scores_mean_square_of_targets() {
        let candidate = evaluate(&line_data(), LinearModel::default()).unwrap();
        // (1 + 9 + 25) / 3
        assert_relative_eq!(candidate.mse, 35. / 3.);
    }

    #[test]
    fn grid_is_sorted_and_finds_true_line() {
        let weights = linspace_grid(0., 4., 5);
        let intercepts = linspace_grid(-1., 1., 3);

        let candidates = grid_search(&line_data(), &weights, &intercepts).unwrap();

        assert_eq!(candidates.len(), 15);
        assert!(candidates.windows(2).all(|w| w[0].mse <= w[1].mse));
        assert_eq!(candidates[0].model, LinearModel::new(2., 1.));
    }

    #[test]
    fn empty_grid_is_rejected() {
        assert!(matches!(
            grid_search(&line_data(), &[], &[0.]),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let empty = Dataset::new(Array1::zeros(0), Array1::zeros(0)).unwrap();
        assert!(matches!(
            evaluate(&empty, LinearModel::default()),
            Err(Error::Empty(_))
        ));
    }

    #[test]
    fn comparison_report() {
        let dataset = generate_cubic(&CubicConfig::default()).unwrap();
        let manual = evaluate(&dataset, LinearModel::new(1., -0.5)).unwrap();
        let fitted = evaluate(&dataset, crate::fit::normal_equations(&dataset).unwrap()).unwrap();

        let comparison = Comparison { manual, fitted };

        assert!(comparison.improvement() >= 0.);
        let report = comparison.to_string();
        assert!(report.starts_with("manual: y = 1.0000 * x - 0.5000"));
        assert!(report.contains("fitted: "));
    }
}
