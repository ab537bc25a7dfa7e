pub mod client;
pub mod models;

pub use client::PtaxClient;
pub use models::{ApiError, QuotePayload, QuoteRecord};
