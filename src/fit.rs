use linfa::traits::Fit;
use linfa::DatasetBase;
use linfa_linear::LinearRegression;
use log::debug;
use nalgebra::{DMatrix, DVector};
use ndarray::Axis;

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::linear::LinearModel;

fn check_fittable(dataset: &Dataset) -> Result<()> {
    if dataset.len() < 2 {
        return Err(Error::InvalidInput("at least two samples are needed to fit a line"));
    }

    let x = dataset.x();
    let first = x[0];
    if x.iter().all(|&v| v == first) {
        return Err(Error::Degenerate);
    }

    Ok(())
}

/// Ordinary least squares through `linfa-linear`, with an intercept.
pub fn fit_least_squares(dataset: &Dataset) -> Result<LinearModel> {
    check_fittable(dataset)?;

    let records = dataset.x().clone().insert_axis(Axis(1));
    let targets = dataset.y().clone();

    let fitted = LinearRegression::new().fit(&DatasetBase::new(records, targets))?;

    let model = LinearModel::new(fitted.params()[0], fitted.intercept());
    debug!("linfa least squares: {model}");

    Ok(model)
}

/// Closed form least squares, solving `XᵀX θ = Xᵀy` for `θ = [weight, intercept]`.
pub fn normal_equations(dataset: &Dataset) -> Result<LinearModel> {
    check_fittable(dataset)?;

    let n = dataset.len();
    let x = dataset.x();

    let design = DMatrix::from_fn(n, 2, |i, j| if j == 0 { x[i] } else { 1. });
    let targets = DVector::from_iterator(n, dataset.y().iter().copied());

    let gram = design.transpose() * &design;
    let moments = design.transpose() * targets;

    let theta = gram.cholesky().ok_or(Error::Degenerate)?.solve(&moments);

    let model = LinearModel::new(theta[0], theta[1]);
    debug!("normal equations: {model}");

    Ok(model)
}
