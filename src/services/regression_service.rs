//! Ordinary-least-squares fit and fit-quality metrics

use thiserror::Error;

use crate::models::{FittedModel, ModelMetrics};

/// Errors from fitting a least-squares line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegressionError {
    #[error("x and y must have the same length (got {x} and {y})")]
    LengthMismatch { x: usize, y: usize },
    #[error("at least 2 observations are required, got {0}")]
    TooFewObservations(usize),
    #[error("normal equations are singular (x values are constant)")]
    SingularSystem,
}

/// Fit y = b0 + b1*x by least squares.
///
/// Builds the normal equations X'Xb = X'y for the design matrix [1 | x] and
/// solves the 2x2 system directly by Gaussian elimination, so the result is
/// the exact closed-form minimizer of the squared residuals up to floating
/// point.
pub fn fit_model(x: &[f64], y: &[f64]) -> Result<FittedModel, RegressionError> {
    if x.len() != y.len() {
        return Err(RegressionError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(RegressionError::TooFewObservations(x.len()));
    }

    let n = x.len() as f64;
    let sum_x: f64 = x.iter().sum();
    let sum_xx: f64 = x.iter().map(|v| v * v).sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y).map(|(a, b)| a * b).sum();

    let xtx = [[n, sum_x], [sum_x, sum_xx]];
    let xty = [sum_y, sum_xy];
    let [intercept, slope] = solve_2x2(xtx, xty)?;

    let predictions = x.iter().map(|v| intercept + slope * v).collect();

    Ok(FittedModel {
        intercept,
        slope,
        predictions,
    })
}

/// Solve a 2x2 linear system by Gaussian elimination with partial pivoting.
/// A vanishing eliminated pivot means the system is singular.
fn solve_2x2(a: [[f64; 2]; 2], b: [f64; 2]) -> Result<[f64; 2], RegressionError> {
    let (p, q) = if a[0][0].abs() >= a[1][0].abs() {
        (0, 1)
    } else {
        (1, 0)
    };
    if a[p][0] == 0.0 {
        return Err(RegressionError::SingularSystem);
    }

    let factor = a[q][0] / a[p][0];
    let reduced = a[q][1] - factor * a[p][1];
    // Tolerance relative to the magnitude of the eliminated column
    let scale = a[p][1].abs().max(a[q][1].abs()).max(1.0);
    if reduced.abs() <= scale * 1e-12 {
        return Err(RegressionError::SingularSystem);
    }

    let x1 = (b[q] - factor * b[p]) / reduced;
    let x0 = (b[p] - a[p][1] * x1) / a[p][0];
    Ok([x0, x1])
}

/// Fit-quality metrics from observed and predicted values.
///
/// R-squared is 1 - RSS/TSS; when every observation is identical TSS is zero
/// and the value comes back non-finite, which callers must tolerate.
pub fn compute_metrics(observed: &[f64], predicted: &[f64]) -> ModelMetrics {
    let n = observed.len();
    let mean = observed.iter().sum::<f64>() / n as f64;
    let rss: f64 = observed
        .iter()
        .zip(predicted)
        .map(|(y, p)| (y - p) * (y - p))
        .sum();
    let tss: f64 = observed.iter().map(|y| (y - mean) * (y - mean)).sum();

    ModelMetrics {
        rss,
        tss,
        r_squared: 1.0 - rss / tss,
        rmse: (rss / n as f64).sqrt(),
        n,
    }
}
