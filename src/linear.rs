use std::fmt;

use ndarray::{Array, ArrayBase, Data, Dimension};

/// `weight * x + intercept`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LinearModel {
    pub weight: f64,
    pub intercept: f64,
}

impl LinearModel {
    pub fn new(weight: f64, intercept: f64) -> Self {
        Self { weight, intercept }
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.weight * x + self.intercept
    }

    /// Element-wise prediction, keeping the shape of `x`.
    pub fn predict_array<S, D>(&self, x: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        x.mapv(|x| self.predict(x))
    }
}

impl fmt::Display for LinearModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.intercept < 0. { '-' } else { '+' };

        write!(
            f,
            "y = {:.4} * x {sign} {:.4}",
            self.weight,
            self.intercept.abs()
        )
    }
}

/// The predictor the learner plugs parameters into.
pub fn f<S, D>(x: &ArrayBase<S, D>, weight: f64, intercept: f64) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    LinearModel::new(weight, intercept).predict_array(x)
}
