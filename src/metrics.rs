use ndarray::{ArrayBase, Data, Ix1, Zip};

use crate::error::{Error, Result};

fn check_paired<S1, S2>(y_true: &ArrayBase<S1, Ix1>, y_pred: &ArrayBase<S2, Ix1>) -> Result<()>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    if y_true.len() != y_pred.len() {
        return Err(Error::ShapeMismatch {
            what: "predictions",
            got: y_pred.len(),
            expected: y_true.len(),
        });
    }
    if y_true.is_empty() {
        return Err(Error::Empty("targets"));
    }

    Ok(())
}

/// Mean of the squared differences between paired samples.
///
/// Differences below roughly `1e-162` square to zero in f64, so such
/// predictions score an mse of exactly zero.
pub fn mean_squared_error<S1, S2>(
    y_true: &ArrayBase<S1, Ix1>,
    y_pred: &ArrayBase<S2, Ix1>,
) -> Result<f64>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    check_paired(y_true, y_pred)?;

    let sse = Zip::from(y_true)
        .and(y_pred)
        .fold(0., |acc, &t, &p| acc + (t - p).powi(2));

    Ok(sse / y_true.len() as f64)
}

/// Coefficient of determination, `1 - SS_res / SS_tot`.
pub fn r2_score<S1, S2>(y_true: &ArrayBase<S1, Ix1>, y_pred: &ArrayBase<S2, Ix1>) -> Result<f64>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    check_paired(y_true, y_pred)?;

    let y_mean = y_true.sum() / y_true.len() as f64;
    let ss_res = Zip::from(y_true)
        .and(y_pred)
        .fold(0., |acc, &t, &p| acc + (t - p).powi(2));
    let ss_tot = y_true.fold(0., |acc, &t| acc + (t - y_mean).powi(2));

    // constant targets
    if ss_tot == 0. {
        return Ok(if ss_res == 0. { 1. } else { 0. });
    }

    Ok(1. - ss_res / ss_tot)
}
