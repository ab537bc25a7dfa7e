//! Result structs for the regression pipeline

/// Coefficients and per-observation predictions from a least-squares fit
#[derive(Debug, Clone)]
pub struct FittedModel {
    pub intercept: f64,
    pub slope: f64,
    /// One prediction per input observation, in input order
    pub predictions: Vec<f64>,
}

impl FittedModel {
    /// Predicted value at an arbitrary x
    pub fn predict_at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Human-readable fitted equation
    pub fn equation(&self) -> String {
        format!("y = {:.4} + {:.4}*x", self.intercept, self.slope)
    }
}

/// Fit-quality metrics computed from observed and predicted values
#[derive(Debug, Clone)]
pub struct ModelMetrics {
    /// Residual sum of squares
    pub rss: f64,
    /// Total sum of squares around the observed mean
    pub tss: f64,
    /// 1 - rss/tss; non-finite when every observation is identical
    pub r_squared: f64,
    pub rmse: f64,
    pub n: usize,
}
