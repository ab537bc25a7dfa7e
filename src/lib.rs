//! Two small analysis pipelines sharing one toolkit crate.
//!
//! The `regfit` binary fits a least-squares line over two text-file columns
//! and charts the result; the `ptax` binary fetches a month of USD PTAX sell
//! rates from the BCB Olinda service, forward-fills missing days and charts
//! the series.

pub mod api;
pub mod models;
pub mod services;
