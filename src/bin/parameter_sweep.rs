use std::fs;

use clap::Parser;
use log::info;
use plotters::prelude::*;

use linear_models_fuw::config::SweepArgs;
use linear_models_fuw::explore::{evaluate, grid_search, linspace_grid};
use linear_models_fuw::fit::fit_least_squares;
use linear_models_fuw::generate_cubic;
use linear_models_fuw::plots::{plot_dataset_with_models, plot_error_curves};
use linear_models_fuw::LinearModel;

const CURVES: usize = 5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = SweepArgs::parse();

    let dataset = generate_cubic(&args.data.cubic_config())?;

    let weights = linspace_grid(args.weight_min, args.weight_max, args.steps);
    let intercepts = linspace_grid(args.intercept_min, args.intercept_max, args.steps);

    let candidates = grid_search(&dataset, &weights, &intercepts)?;
    info!("evaluated {} candidates", candidates.len());

    println!("best {} of {} hand picked models:", args.top, candidates.len());
    for candidate in candidates.iter().take(args.top) {
        println!("  {} (mse {:.4})", candidate.model, candidate.mse);
    }

    let fitted = evaluate(&dataset, fit_least_squares(&dataset)?)?;
    println!("least squares: {} (mse {:.4})", fitted.model, fitted.mse);

    if let Some(best) = candidates.first() {
        println!("grid gap to least squares: {:.6}", best.mse - fitted.mse);
    }

    let curve_intercepts = linspace_grid(args.intercept_min, args.intercept_max, CURVES)
        .into_iter()
        .chain(std::iter::once(fitted.model.intercept));

    let curves = curve_intercepts
        .map(|intercept| -> linear_models_fuw::Result<(String, Vec<(f64, f64)>)> {
            let curve = weights
                .iter()
                .map(|&weight| {
                    evaluate(&dataset, LinearModel::new(weight, intercept))
                        .map(|candidate| (weight, candidate.mse))
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok((format!("intercept {intercept:.2}"), curve))
        })
        .collect::<linear_models_fuw::Result<Vec<_>>>()?;

    if let Some(parent) = args.plot_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let drawing_area = SVGBackend::new(&args.plot_path, (1600, 700)).into_drawing_area();

    let (left, right) = drawing_area.split_horizontally(800);

    plot_error_curves(&curves, "mse against weight", "weight", &left)?;

    let best_models: Vec<(String, LinearModel)> = candidates
        .iter()
        .take(args.top.min(3))
        .enumerate()
        .map(|(i, candidate)| (format!("grid #{}", i + 1), candidate.model))
        .chain(std::iter::once(("least squares".to_string(), fitted.model)))
        .collect();
    let labelled: Vec<(&str, LinearModel)> = best_models
        .iter()
        .map(|(label, model)| (label.as_str(), *model))
        .collect();

    plot_dataset_with_models(&dataset, &labelled, "best hand picked models", &right)?;

    drawing_area.present()?;
    info!("plot written to {}", args.plot_path.display());

    Ok(())
}
