//! Pipeline stage logic
//!
//! Each service is one stage of a pipeline: it takes the previous stage's
//! result struct and produces the next one, or a typed error.

pub mod chart_service;
pub mod dataset_service;
pub mod quote_service;
pub mod regression_service;
