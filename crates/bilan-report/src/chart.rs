//! PNG line charts of ratio series by period.

use std::path::Path;

use bilan_ratios::{RatioMetric, RatioTable};
use plotters::prelude::*;

use crate::{ReportError, Result};

/// A line chart of one or more ratio metrics against period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSpec {
    /// Chart caption.
    pub title: &'static str,
    /// Metrics drawn as separate lines, in legend order.
    pub metrics: &'static [RatioMetric],
}

/// Gross, operating and net margin by period.
pub const MARGINS_CHART: ChartSpec = ChartSpec {
    title: "Margins by Period",
    metrics: &[
        RatioMetric::GrossMargin,
        RatioMetric::OperatingMargin,
        RatioMetric::NetMargin,
    ],
};

/// Return on assets and return on equity by period.
pub const ROA_ROE_CHART: ChartSpec = ChartSpec {
    title: "ROA and ROE by Period",
    metrics: &[RatioMetric::Roa, RatioMetric::Roe],
};

/// Splits a series into runs of consecutive finite points.
///
/// Points are `(index, value)` with the index into the period axis. Missing,
/// NaN and infinite values end the current run, leaving a gap in the line.
pub fn finite_segments(values: &[Option<f64>]) -> Vec<Vec<(i32, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for (i, value) in values.iter().enumerate() {
        match value {
            Some(v) if v.is_finite() => current.push((i as i32, *v)),
            _ => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Y-axis bounds covering every finite value, padded by 10% of the span.
///
/// Falls back to `0.0..1.0` when nothing is finite.
pub fn value_bounds(series: &[Vec<Option<f64>>]) -> (f64, f64) {
    let finite = series
        .iter()
        .flatten()
        .filter_map(|v| *v)
        .filter(|v| v.is_finite());

    let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if min > max {
        return (0.0, 1.0);
    }

    let span = max - min;
    let pad = if span > 0.0 {
        span * 0.1
    } else {
        (min.abs() * 0.1).max(0.1)
    };
    (min - pad, max + pad)
}

fn chart_error(err: impl std::fmt::Display) -> ReportError {
    ReportError::Chart(err.to_string())
}

/// Renders `spec` for the given ratio table into a PNG file.
pub fn render_chart(
    spec: &ChartSpec,
    table: &RatioTable,
    path: &Path,
    size: (u32, u32),
) -> Result<()> {
    let labels: Vec<String> = table.periods().iter().map(|p| p.to_string()).collect();
    let series: Vec<Vec<Option<f64>>> = spec.metrics.iter().map(|m| table.series(*m)).collect();
    let (y_min, y_max) = value_bounds(&series);

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(spec.title, ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-1..labels.len() as i32, y_min..y_max)
        .map_err(chart_error)?;

    let period_label = |x: &i32| {
        usize::try_from(*x)
            .ok()
            .and_then(|i| labels.get(i))
            .cloned()
            .unwrap_or_default()
    };
    chart
        .configure_mesh()
        .x_labels(labels.len() + 2)
        .x_label_formatter(&period_label)
        .x_desc("Period")
        .y_desc("Ratio")
        .draw()
        .map_err(chart_error)?;

    for (i, (metric, values)) in spec.metrics.iter().zip(&series).enumerate() {
        let style = Palette99::pick(i).stroke_width(2);
        let mut labelled = false;

        for segment in finite_segments(values) {
            let drawn = chart
                .draw_series(LineSeries::new(segment, style).point_size(3))
                .map_err(chart_error)?;
            if !labelled {
                drawn
                    .label(metric.label())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
                labelled = true;
            }
        }
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(chart_error)?;

    root.present().map_err(chart_error)?;
    Ok(())
}
