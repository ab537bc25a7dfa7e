//! Simple linear regression over two text-file columns.
//!
//! Usage: `regfit [X_FILE] [Y_FILE] [OUTPUT_SVG]`
//! Defaults: `X.txt`, `y.txt`, `regression_analysis.svg`.

use std::path::PathBuf;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use quotelab::models::{FittedModel, ModelMetrics};
use quotelab::services::chart_service::{self, ChartMeta, ChartSeries, SeriesStyle};
use quotelab::services::{dataset_service, regression_service};

fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("quotelab=info".parse().unwrap())
                .add_directive("regfit=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let x_path = PathBuf::from(args.get(1).map(String::as_str).unwrap_or("X.txt"));
    let y_path = PathBuf::from(args.get(2).map(String::as_str).unwrap_or("y.txt"));
    let output = PathBuf::from(
        args.get(3)
            .map(String::as_str)
            .unwrap_or("regression_analysis.svg"),
    );

    info!("Linear regression analysis");

    let dataset = match dataset_service::load_xy(&x_path, &y_path) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("failed to load data: {}", e);
            return;
        }
    };

    info!("Data loaded: {} observations", dataset.len());
    if let (Some((x_lo, x_hi)), Some((y_lo, y_hi))) = (dataset.x_range(), dataset.y_range()) {
        info!("  x: [{:.2}, {:.2}]  y: [{:.2}, {:.2}]", x_lo, x_hi, y_lo, y_hi);
    }

    let model = match regression_service::fit_model(&dataset.x, &dataset.y) {
        Ok(model) => model,
        Err(e) => {
            error!("fit failed: {}", e);
            return;
        }
    };

    let metrics = regression_service::compute_metrics(&dataset.y, &model.predictions);
    print_summary(&model, &metrics);

    let observed: Vec<(f64, f64)> = dataset
        .x
        .iter()
        .zip(&dataset.y)
        .map(|(&x, &y)| (x, y))
        .collect();
    // Fitted points ordered by x so the line renders left to right
    let mut fitted: Vec<(f64, f64)> = dataset
        .x
        .iter()
        .zip(&model.predictions)
        .map(|(&x, &p)| (x, p))
        .collect();
    fitted.sort_by(|a, b| a.0.total_cmp(&b.0));

    let series = [
        ChartSeries {
            label: "Observed".to_string(),
            points: observed,
            style: SeriesStyle::Points,
            color: chart_service::OBSERVED_COLOR,
        },
        ChartSeries {
            label: format!("Fitted (R2 = {:.4})", metrics.r_squared),
            points: fitted,
            style: SeriesStyle::Line,
            color: chart_service::FITTED_COLOR,
        },
    ];
    let meta = ChartMeta {
        title: "Linear regression analysis".to_string(),
        x_label: "x".to_string(),
        y_label: "y".to_string(),
    };

    match chart_service::render_xy(&series, &meta, &output) {
        Ok(path) => info!("Chart saved to {}", path.display()),
        Err(e) => error!("failed to render chart: {}", e),
    }
}

fn print_summary(model: &FittedModel, metrics: &ModelMetrics) {
    println!();
    println!("Model summary ({} observations)", metrics.n);
    println!("--------------------------------------");
    println!("  intercept (b0):  {:>10.4}", model.intercept);
    println!("  slope     (b1):  {:>10.4}", model.slope);
    println!("  R-squared:       {:>10.4}", metrics.r_squared);
    println!("  RMSE:            {:>10.4}", metrics.rmse);
    println!("--------------------------------------");
    println!("  {}", model.equation());
    println!();
}
