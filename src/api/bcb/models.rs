use serde::Deserialize;
use thiserror::Error;

/// Response envelope from the CotacaoDolarPeriodo endpoint.
///
/// An empty `value` array is how the service reports a period with no
/// published quotes (weekends/holidays only); it is not an error.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotePayload {
    pub value: Vec<QuoteRecord>,
}

/// One raw quote bulletin as returned by the service
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRecord {
    /// Bulletin timestamp, e.g. "2019-02-01 13:11:10.762"
    #[serde(rename = "dataHoraCotacao")]
    pub quoted_at: String,
    /// Sell rate in BRL per USD
    #[serde(rename = "cotacaoVenda")]
    pub sell_rate: f64,
}

/// Errors for PTAX quote service operations
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request timed out after {0} seconds")]
    Timeout(u64),
    #[error("request failed: {0}")]
    Request(String),
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },
    #[error("failed to decode response: {0}")]
    Deserialization(String),
}
