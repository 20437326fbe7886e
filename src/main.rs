use std::fs;

use clap::Parser;
use log::{info, warn};
use plotters::prelude::*;

use linear_models_fuw::config::ExerciseArgs;
use linear_models_fuw::explore::{evaluate, Comparison};
use linear_models_fuw::fit::{fit_least_squares, normal_equations};
use linear_models_fuw::metrics::r2_score;
use linear_models_fuw::plots::{plot_dataset, plot_dataset_with_models};
use linear_models_fuw::{generate_cubic, Dataset, LinearModel};

const SOLVER_TOLERANCE: f64 = 1e-6;

/// Compares the linfa fit against the normal equations. Disagreement or a
/// failing closed form only warns.
fn cross_check(dataset: &Dataset, fitted: LinearModel) -> bool {
    match normal_equations(dataset) {
        Ok(closed_form) => {
            let agree = (closed_form.weight - fitted.weight).abs() <= SOLVER_TOLERANCE
                && (closed_form.intercept - fitted.intercept).abs() <= SOLVER_TOLERANCE;

            if !agree {
                warn!(
                    "least squares solvers disagree: linfa {} vs normal equations {}",
                    fitted, closed_form
                );
            }

            agree
        }
        Err(e) => {
            warn!("normal equations cross check skipped: {e}");
            false
        }
    }
}

// manual first so it keeps the color of the middle panel
fn comparison_models(
    manual: LinearModel,
    fitted: LinearModel,
) -> [(&'static str, LinearModel); 2] {
    [("manual", manual), ("least squares", fitted)]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = ExerciseArgs::parse();

    let dataset = generate_cubic(&args.cubic_config())?;
    println!("generated {} samples", dataset.len());

    let manual = evaluate(&dataset, args.manual_model())?;
    println!("manual model: {}", manual.model);
    println!("manual mse: {:.4}", manual.mse);

    let fitted = evaluate(&dataset, fit_least_squares(&dataset)?)?;

    cross_check(&dataset, fitted.model);

    let r2 = r2_score(dataset.y(), &fitted.model.predict_array(dataset.x()))?;

    println!("fitted model: {}", fitted.model);
    println!("fitted mse: {:.4}", fitted.mse);
    println!("fitted r2: {:.4}", r2);

    let comparison = Comparison { manual, fitted };
    println!("{comparison}");

    if args.no_plot {
        return Ok(());
    }

    if let Some(parent) = args.plot_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let drawing_area = SVGBackend::new(&args.plot_path, (1800, 600)).into_drawing_area();

    if let [data_area, manual_area, fitted_area] = drawing_area.split_evenly((1, 3)).as_slice() {
        plot_dataset(&dataset, "data", data_area)?;
        plot_dataset_with_models(
            &dataset,
            &[("manual", manual.model)],
            &format!("manual, mse {:.3}", manual.mse),
            manual_area,
        )?;
        plot_dataset_with_models(
            &dataset,
            &comparison_models(manual.model, fitted.model),
            &format!("least squares, mse {:.3}", fitted.mse),
            fitted_area,
        )?;
    }

    drawing_area.present()?;
    info!("plot written to {}", args.plot_path.display());

    Ok(())
}
