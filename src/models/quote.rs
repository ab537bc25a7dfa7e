//! Quote records for the currency pipeline

use chrono::NaiveDate;

/// One observed sell-rate quote for a calendar day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyQuote {
    pub day: NaiveDate,
    pub sell_rate: f64,
}

/// A calendar day in the completed month sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilledDay {
    pub day: NaiveDate,
    /// None only for leading days with no prior observation
    pub rate: Option<f64>,
    /// True when the rate was carried forward from an earlier day
    pub carried: bool,
}

/// Complete day-by-day sequence for a month, gaps carried forward
#[derive(Debug, Clone)]
pub struct QuoteSeries {
    pub days: Vec<FilledDay>,
    /// Days with a direct quote inside the range
    pub observed: usize,
    /// Days that took their rate from an earlier day
    pub carried: usize,
}

/// Min/max/mean over the defined rates of a series
#[derive(Debug, Clone, Copy)]
pub struct RateStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}
