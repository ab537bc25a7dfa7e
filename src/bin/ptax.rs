//! Monthly USD PTAX sell-rate lookup with a time-series chart.
//!
//! Usage: `ptax [MMYYYY]` (default `022019`).
//! The quote endpoint can be overridden with the `PTAX_BASE_URL`
//! environment variable.

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use quotelab::api::bcb::{ApiError, PtaxClient};
use quotelab::models::{Period, RateStats};
use quotelab::services::chart_service::{self, ChartMeta};
use quotelab::services::quote_service;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("quotelab=info".parse().unwrap())
                .add_directive("ptax=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let arg = std::env::args().nth(1).unwrap_or_else(|| "022019".to_string());
    let period = match Period::parse(&arg) {
        Ok(period) => period,
        Err(e) => {
            error!("invalid period '{}': {} (example: 072016)", arg, e);
            return;
        }
    };

    info!("Fetching USD PTAX quotes for {}", period);

    let client = match std::env::var("PTAX_BASE_URL") {
        Ok(base_url) => PtaxClient::with_base_url(base_url),
        Err(_) => PtaxClient::new(),
    };

    let quotes = match client
        .fetch_sell_rates(period.first_day(), period.last_day())
        .await
    {
        Ok(quotes) => quotes,
        Err(ApiError::Timeout(secs)) => {
            error!("quote service did not answer within {}s, aborting", secs);
            return;
        }
        Err(e) => {
            error!("quote request failed: {}", e);
            return;
        }
    };

    if quotes.is_empty() {
        warn!("no quotes published for {}; nothing to chart", period);
        return;
    }
    info!("{} quoted days retrieved", quotes.len());

    let series = quote_service::fill_missing_days(&quotes, period.first_day(), period.last_day());
    if series.carried > 0 {
        info!(
            "{} days carried forward from the previous quote",
            series.carried
        );
    }

    if let Some(stats) = quote_service::rate_stats(&series) {
        print_stats(&stats);
    }

    let points: Vec<(NaiveDate, f64)> = series
        .days
        .iter()
        .filter_map(|d| d.rate.map(|rate| (d.day, rate)))
        .collect();

    let meta = ChartMeta {
        title: format!("USD PTAX sell rate - {} {}", period.month_name(), period.year),
        x_label: "Day".to_string(),
        y_label: "BRL per USD".to_string(),
    };
    let output = PathBuf::from(format!("ptax_usd_{}.svg", period.compact()));

    match chart_service::render_daily("Sell rate", &points, &meta, &output) {
        Ok(path) => info!("Chart saved to {}", path.display()),
        Err(e) => error!("failed to render chart: {}", e),
    }
}

fn print_stats(stats: &RateStats) {
    println!();
    println!("Period statistics");
    println!("--------------------------------------");
    println!("  minimum:  R$ {:.4}", stats.min);
    println!("  maximum:  R$ {:.4}", stats.max);
    println!("  mean:     R$ {:.4}", stats.mean);
    println!("--------------------------------------");
    println!();
}
