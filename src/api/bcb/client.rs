use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use reqwest::Client as HttpClient;
use tracing::{debug, warn};

use super::models::{ApiError, QuotePayload, QuoteRecord};
use crate::models::DailyQuote;

/// Client for the BCB Olinda daily USD PTAX quote service
pub struct PtaxClient {
    http_client: HttpClient,
    base_url: String,
}

impl PtaxClient {
    const DEFAULT_BASE_URL: &'static str =
        "https://olinda.bcb.gov.br/olinda/servico/PTAX/versao/v1/odata";

    /// Bound on the single quote request; past this the pipeline aborts.
    const REQUEST_TIMEOUT_SECS: u64 = 10;

    /// Create a client against the public BCB endpoint
    pub fn new() -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a client with a custom base URL (for testing or mirrors)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
        }
    }

    /// Build the CotacaoDolarPeriodo query URL for an inclusive date range.
    /// The service expects MM-DD-YYYY dates and an explicit $format.
    fn quote_period_url(&self, start: NaiveDate, end: NaiveDate) -> String {
        format!(
            "{}/CotacaoDolarPeriodo(dataInicial=@dataInicial,dataFinalCotacao=@dataFinalCotacao)?\
             @dataInicial='{}'&@dataFinalCotacao='{}'&$format=json",
            self.base_url,
            start.format("%m-%d-%Y"),
            end.format("%m-%d-%Y"),
        )
    }

    /// GET CotacaoDolarPeriodo
    ///
    /// Fetches every published sell-rate bulletin in the inclusive range and
    /// collapses them to one quote per calendar day, sorted ascending.
    /// Returns an empty vector when the service reports no quotes for the
    /// period.
    ///
    /// # Returns
    /// * `Ok(Vec<DailyQuote>)` - One quote per quoted day, possibly empty
    /// * `Err(ApiError)` - Timeout, request failure, non-2xx status, or a
    ///   payload that does not decode
    pub async fn fetch_sell_rates(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyQuote>, ApiError> {
        let url = self.quote_period_url(start, end);
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .timeout(Duration::from_secs(Self::REQUEST_TIMEOUT_SECS))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiError::Timeout(Self::REQUEST_TIMEOUT_SECS)
                } else {
                    ApiError::Request(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!("quote service returned HTTP {}", status);
            return Err(ApiError::Http { status, body });
        }

        let payload = response
            .json::<QuotePayload>()
            .await
            .map_err(|e| ApiError::Deserialization(format!("invalid quote payload: {}", e)))?;

        collapse_daily(&payload.value)
    }
}

impl Default for PtaxClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse raw bulletins to one quote per calendar day, sorted ascending.
/// When a day has several bulletins the last one in the payload wins.
fn collapse_daily(records: &[QuoteRecord]) -> Result<Vec<DailyQuote>, ApiError> {
    let mut by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in records {
        let day = parse_quote_day(&record.quoted_at)?;
        by_day.insert(day, record.sell_rate);
    }

    Ok(by_day
        .into_iter()
        .map(|(day, sell_rate)| DailyQuote { day, sell_rate })
        .collect())
}

/// Date portion of a bulletin timestamp such as "2019-02-01 13:11:10.762"
fn parse_quote_day(timestamp: &str) -> Result<NaiveDate, ApiError> {
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S%.f")
        .map(|dt| dt.date())
        .map_err(|e| {
            ApiError::Deserialization(format!("bad quote timestamp '{}': {}", timestamp, e))
        })
}
