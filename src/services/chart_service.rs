//! SVG chart rendering for both pipelines
//!
//! Takes named series plus display metadata, writes a self-contained chart
//! document and hands back its path. Rendering failures surface as plain
//! string messages; there is nothing to recover from at this stage.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use plotters::prelude::*;

/// Observed-data scatter color
pub const OBSERVED_COLOR: RGBColor = RGBColor(52, 152, 219);
/// Fitted-line color
pub const FITTED_COLOR: RGBColor = RGBColor(231, 76, 60);

const QUOTE_LINE_COLOR: RGBColor = RGBColor(0, 168, 107);
const QUOTE_MARKER_COLOR: RGBColor = RGBColor(0, 107, 78);

const CHART_SIZE: (u32, u32) = (900, 600);

/// How a series is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
    Points,
    Line,
}

/// A named series of (x, y) points
#[derive(Debug, Clone)]
pub struct ChartSeries {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub style: SeriesStyle,
    pub color: RGBColor,
}

/// Display metadata for a chart
#[derive(Debug, Clone)]
pub struct ChartMeta {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

/// Render named numeric series into an SVG chart document.
///
/// Returns the path of the written file; labeled series get a legend entry.
pub fn render_xy(
    series: &[ChartSeries],
    meta: &ChartMeta,
    output: &Path,
) -> Result<PathBuf, String> {
    if series.iter().all(|s| s.points.is_empty()) {
        return Err("no points to plot".to_string());
    }

    let (x_min, x_max) = padded_range(series.iter().flat_map(|s| s.points.iter().map(|p| p.0)));
    let (y_min, y_max) = padded_range(series.iter().flat_map(|s| s.points.iter().map(|p| p.1)));

    let root = SVGBackend::new(output, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| format!("failed to fill canvas: {}", e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&meta.title, ("sans-serif", 28.0).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| format!("failed to build chart: {}", e))?;

    chart
        .configure_mesh()
        .x_desc(meta.x_label.as_str())
        .y_desc(meta.y_label.as_str())
        .draw()
        .map_err(|e| format!("failed to draw mesh: {}", e))?;

    for s in series {
        let color = s.color;
        match s.style {
            SeriesStyle::Points => {
                let anno = chart
                    .draw_series(
                        s.points
                            .iter()
                            .map(|&(x, y)| Circle::new((x, y), 4, color.filled())),
                    )
                    .map_err(|e| format!("failed to draw series '{}': {}", s.label, e))?;
                if !s.label.is_empty() {
                    anno.label(s.label.as_str())
                        .legend(move |(x, y)| Circle::new((x + 10, y), 4, color.filled()));
                }
            }
            SeriesStyle::Line => {
                let anno = chart
                    .draw_series(LineSeries::new(
                        s.points.iter().copied(),
                        color.stroke_width(3),
                    ))
                    .map_err(|e| format!("failed to draw series '{}': {}", s.label, e))?;
                if !s.label.is_empty() {
                    anno.label(s.label.as_str()).legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3))
                    });
                }
            }
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| format!("failed to draw legend: {}", e))?;

    root.present()
        .map_err(|e| format!("failed to render chart: {}", e))?;

    Ok(output.to_path_buf())
}

/// Render one daily series into an SVG chart document with a calendar x-axis.
/// Points are drawn as a line with markers, the original quote-chart look.
pub fn render_daily(
    label: &str,
    points: &[(NaiveDate, f64)],
    meta: &ChartMeta,
    output: &Path,
) -> Result<PathBuf, String> {
    if points.len() < 2 {
        return Err("not enough points to plot (minimum 2 required)".to_string());
    }

    let x_min = points[0].0;
    let x_max = points[points.len() - 1].0;
    let (y_min, y_max) = padded_range(points.iter().map(|p| p.1));

    let root = SVGBackend::new(output, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| format!("failed to fill canvas: {}", e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&meta.title, ("sans-serif", 28.0).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| format!("failed to build chart: {}", e))?;

    chart
        .configure_mesh()
        .x_desc(meta.x_label.as_str())
        .y_desc(meta.y_label.as_str())
        .x_label_formatter(&|day: &NaiveDate| day.format("%d/%m").to_string())
        .draw()
        .map_err(|e| format!("failed to draw mesh: {}", e))?;

    chart
        .draw_series(LineSeries::new(
            points.iter().copied(),
            QUOTE_LINE_COLOR.stroke_width(2),
        ))
        .map_err(|e| format!("failed to draw series '{}': {}", label, e))?
        .label(label)
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], QUOTE_LINE_COLOR.stroke_width(2))
        });

    chart
        .draw_series(
            points
                .iter()
                .map(|&(day, rate)| Circle::new((day, rate), 3, QUOTE_MARKER_COLOR.filled())),
        )
        .map_err(|e| format!("failed to draw markers: {}", e))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| format!("failed to draw legend: {}", e))?;

    root.present()
        .map_err(|e| format!("failed to render chart: {}", e))?;

    Ok(output.to_path_buf())
}

/// Min/max of the values with a little padding so nothing sits on the frame
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let span = (max - min).max(1e-8);
    let pad = span * 0.05;
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_chart(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("quotelab_{}_{}.svg", std::process::id(), name))
    }

    #[test]
    fn test_render_xy_writes_svg() {
        let series = [
            ChartSeries {
                label: "Observed".to_string(),
                points: vec![(1.0, 2.1), (2.0, 3.9), (3.0, 6.0)],
                style: SeriesStyle::Points,
                color: OBSERVED_COLOR,
            },
            ChartSeries {
                label: "Fitted".to_string(),
                points: vec![(1.0, 2.0), (3.0, 6.0)],
                style: SeriesStyle::Line,
                color: FITTED_COLOR,
            },
        ];
        let meta = ChartMeta {
            title: "test chart".to_string(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
        };

        let path = temp_chart("xy");
        let written = render_xy(&series, &meta, &path).expect("render");
        let contents = std::fs::read_to_string(&written).expect("read svg");
        assert!(contents.contains("<svg"));
        let _ = std::fs::remove_file(written);
    }

    #[test]
    fn test_render_xy_rejects_empty_input() {
        let meta = ChartMeta {
            title: "empty".to_string(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
        };
        assert!(render_xy(&[], &meta, &temp_chart("empty")).is_err());
    }

    #[test]
    fn test_render_daily_writes_svg() {
        let day = |d| NaiveDate::from_ymd_opt(2019, 2, d).expect("valid day");
        let points = [(day(1), 3.71), (day(2), 3.71), (day(3), 3.74)];
        let meta = ChartMeta {
            title: "quotes".to_string(),
            x_label: "Day".to_string(),
            y_label: "BRL per USD".to_string(),
        };

        let path = temp_chart("daily");
        let written = render_daily("Sell rate", &points, &meta, &path).expect("render");
        let contents = std::fs::read_to_string(&written).expect("read svg");
        assert!(contents.contains("<svg"));
        let _ = std::fs::remove_file(written);
    }

    #[test]
    fn test_render_daily_rejects_single_point() {
        let day = NaiveDate::from_ymd_opt(2019, 2, 1).expect("valid day");
        let meta = ChartMeta {
            title: "one".to_string(),
            x_label: "Day".to_string(),
            y_label: "rate".to_string(),
        };
        assert!(render_daily("Sell rate", &[(day, 1.0)], &meta, &temp_chart("one")).is_err());
    }
}
