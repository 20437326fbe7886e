use std::ops::Range;

use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::full_palette;

use crate::dataset::Dataset;
use crate::error::Error;
use crate::linear::LinearModel;

const COLORS: [RGBColor; 6] = [
    full_palette::RED,
    full_palette::GREEN,
    full_palette::ORANGE,
    full_palette::PURPLE,
    full_palette::TEAL,
    full_palette::BLACK,
];

fn series_color(i: usize) -> RGBColor {
    COLORS[i % COLORS.len()]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMax<T> {
    pub min: T,
    pub max: T,
}

pub fn find_max_min<T: PartialOrd + Copy>(mut data: impl Iterator<Item = T>) -> Option<MinMax<T>> {
    let init = data.next()?;

    Some(data.fold(MinMax { min: init, max: init }, |acc, x| MinMax {
        min: if x < acc.min { x } else { acc.min },
        max: if x > acc.max { x } else { acc.max },
    }))
}

fn padded(MinMax { min, max }: MinMax<f64>) -> Range<f64> {
    let pad = ((max - min) * 0.05).max(1e-3);

    (min - pad)..(max + pad)
}

/// Scatter of the samples.
pub fn plot_dataset<DB>(
    dataset: &Dataset,
    caption: &str,
    drawing_area: &DrawingArea<DB, Shift>,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    <DB as DrawingBackend>::ErrorType: 'static,
{
    plot_dataset_with_models(dataset, &[], caption, drawing_area)
}

/// Scatter of the samples with one line per model, drawn across the span of
/// the inputs.
pub fn plot_dataset_with_models<DB>(
    dataset: &Dataset,
    models: &[(&str, LinearModel)],
    caption: &str,
    drawing_area: &DrawingArea<DB, Shift>,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    <DB as DrawingBackend>::ErrorType: 'static,
{
    let x_span = find_max_min(dataset.x().iter().copied()).ok_or(Error::Empty("dataset"))?;

    let line_ends = models
        .iter()
        .flat_map(|(_, model)| [model.predict(x_span.min), model.predict(x_span.max)]);
    let y_span = find_max_min(dataset.y().iter().copied().chain(line_ends))
        .ok_or(Error::Empty("dataset"))?;

    drawing_area.fill(&WHITE)?;

    let mut chart_builder = ChartBuilder::on(drawing_area);

    let mut chart_context = chart_builder
        .caption(caption, ("Arial", 20))
        .set_all_label_area_size(50)
        .margin(20)
        .build_cartesian_2d(padded(x_span), padded(y_span))?;

    chart_context
        .configure_mesh()
        .x_labels(10)
        .x_desc("x")
        .y_labels(10)
        .y_desc("y")
        .draw()?;

    chart_context
        .draw_series(
            dataset
                .iter()
                .map(|(x, y)| Circle::new((x, y), 3, BLUE.mix(0.6).filled())),
        )?
        .label("data")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, BLUE.filled()));

    for (i, &(label, model)) in models.iter().enumerate() {
        let color = series_color(i);

        let line = LineSeries::new(
            [x_span.min, x_span.max].map(|x| (x, model.predict(x))),
            color.stroke_width(2),
        );

        chart_context
            .draw_series(line)?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart_context
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    debug!("plotted {} samples and {} models", dataset.len(), models.len());

    Ok(())
}

/// Error curves on a log scaled y axis, e.g. mse against the weight for a few
/// fixed intercepts.
pub fn plot_error_curves<DB>(
    curves: &[(String, Vec<(f64, f64)>)],
    caption: &str,
    x_desc: &str,
    drawing_area: &DrawingArea<DB, Shift>,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    <DB as DrawingBackend>::ErrorType: 'static,
{
    let points = || curves.iter().flat_map(|(_, curve)| curve.iter().copied());

    let x_span = find_max_min(points().map(|(x, _)| x)).ok_or(Error::Empty("error curves"))?;
    let y_span = find_max_min(points().map(|(_, y)| y)).ok_or(Error::Empty("error curves"))?;

    let y_min = y_span.min.max(1e-6) * 0.9;
    let y_max = y_span.max.max(y_min) * 1.1;

    drawing_area.fill(&WHITE)?;

    let mut chart_builder = ChartBuilder::on(drawing_area);

    let mut chart_context = chart_builder
        .caption(caption, ("Arial", 20))
        .set_all_label_area_size(70)
        .margin(50)
        .build_cartesian_2d(padded(x_span), (y_min..y_max).log_scale())?;

    chart_context
        .configure_mesh()
        .x_labels(10)
        .x_desc(x_desc)
        .y_labels(10)
        .y_desc("mse")
        .y_label_formatter(&|y| format!("{:.1e}", y))
        .draw()?;

    for (i, (label, curve)) in curves.iter().enumerate() {
        let color = series_color(i);

        chart_context
            .draw_series(LineSeries::new(curve.iter().copied(), color.filled()))?
            .label(label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart_context
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{generate_cubic, CubicConfig};
    use ndarray::Array1;

    fn render<F>(draw: F) -> String
    where
        F: FnOnce(&DrawingArea<SVGBackend, Shift>) -> Result<(), Box<dyn std::error::Error>>,
    {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (800, 600)).into_drawing_area();
            draw(&root).unwrap();
            root.present().unwrap();
        }
        svg
    }

    #[test]
    fn find_max_min_of_sequence() {
        let span = find_max_min([3., -1., 7., 0.].into_iter()).unwrap();
        assert_eq!(span, MinMax { min: -1., max: 7. });

        assert_eq!(find_max_min(std::iter::empty::<f64>()), None);
    }

    #[test]
    fn sweep_curves_get_distinct_colors() {
        let colors: Vec<RGBColor> = (0..6).map(series_color).collect();

        for (i, a) in colors.iter().enumerate() {
            assert!(colors[i + 1..].iter().all(|b| a != b));
            assert_ne!(*a, BLUE);
        }
    }

    #[test]
    fn padded_range_never_collapses() {
        let range = padded(MinMax { min: 1., max: 1. });
        assert!(range.start < 1. && range.end > 1.);
    }

    #[test]
    fn renders_data_and_models() {
        let dataset = generate_cubic(&CubicConfig::default()).unwrap();
        let models = [
            ("manual", LinearModel::new(1., -0.5)),
            ("fitted", LinearModel::new(0.6, -0.3)),
        ];

        let svg = render(|area| plot_dataset_with_models(&dataset, &models, "cubic", area));

        assert!(svg.contains("<svg"));
        assert!(svg.matches("<circle").count() >= dataset.len());
        assert!(svg.contains("manual"));
        assert!(svg.contains("fitted"));
    }

    #[test]
    fn renders_error_curves() {
        let curves = vec![
            ("b = 0".to_string(), vec![(0., 1.), (1., 0.2), (2., 0.9)]),
            ("b = 1".to_string(), vec![(0., 2.), (1., 1.2), (2., 1.9)]),
        ];

        let svg = render(|area| plot_error_curves(&curves, "sweep", "weight", area));

        assert!(svg.contains("<polyline"));
        assert!(svg.contains("b = 1"));
    }

    #[test]
    fn empty_input_is_an_error() {
        let empty = Dataset::new(Array1::zeros(0), Array1::zeros(0)).unwrap();
        let mut svg = String::new();
        let root = SVGBackend::with_string(&mut svg, (100, 100)).into_drawing_area();

        assert!(plot_dataset(&empty, "empty", &root).is_err());
        assert!(plot_error_curves(&[], "empty", "weight", &root).is_err());
    }
}
