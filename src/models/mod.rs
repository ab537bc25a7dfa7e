//! Data models passed between pipeline stages
//!
//! Each stage produces an immutable result struct consumed by the next
//! stage, so nothing depends on hidden call order.

pub mod dataset;
pub mod period;
pub mod quote;
pub mod regression;

// Re-export commonly used types for convenience
pub use dataset::Dataset;
pub use period::{Period, PeriodError};
pub use quote::{DailyQuote, FilledDay, QuoteSeries, RateStats};
pub use regression::{FittedModel, ModelMetrics};
