//! Forward-fill of missing calendar days and period statistics

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{DailyQuote, FilledDay, QuoteSeries, RateStats};

/// Complete every day in the inclusive range, carrying the most recent known
/// rate over days without a direct quote.
///
/// An explicit fold over the day range: a quoted day resets the accumulator,
/// an unquoted day takes whatever the accumulator holds. Days before the
/// first observation have nothing to carry and stay None; there is no
/// back-fill and no zero-fill.
pub fn fill_missing_days(quotes: &[DailyQuote], start: NaiveDate, end: NaiveDate) -> QuoteSeries {
    let by_day: BTreeMap<NaiveDate, f64> =
        quotes.iter().map(|q| (q.day, q.sell_rate)).collect();

    let mut days = Vec::new();
    let mut observed = 0;
    let mut carried = 0;
    let mut last_known: Option<f64> = None;

    for day in start.iter_days().take_while(|d| *d <= end) {
        match by_day.get(&day) {
            Some(&rate) => {
                last_known = Some(rate);
                observed += 1;
                days.push(FilledDay {
                    day,
                    rate: Some(rate),
                    carried: false,
                });
            }
            None => {
                if last_known.is_some() {
                    carried += 1;
                }
                days.push(FilledDay {
                    day,
                    rate: last_known,
                    carried: last_known.is_some(),
                });
            }
        }
    }

    debug!("{} observed days, {} carried forward", observed, carried);

    QuoteSeries {
        days,
        observed,
        carried,
    }
}

/// Min/max/mean over the defined rates of a filled series.
/// None when no day in the series has a rate.
pub fn rate_stats(series: &QuoteSeries) -> Option<RateStats> {
    let rates: Vec<f64> = series.days.iter().filter_map(|d| d.rate).collect();
    if rates.is_empty() {
        return None;
    }

    let min = rates.iter().copied().fold(f64::INFINITY, f64::min);
    let max = rates.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = rates.iter().sum::<f64>() / rates.len() as f64;

    Some(RateStats { min, max, mean })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 2, d).expect("valid day")
    }

    fn quote(d: u32, sell_rate: f64) -> DailyQuote {
        DailyQuote {
            day: day(d),
            sell_rate,
        }
    }

    #[test]
    fn test_carries_forward_missing_days() {
        let quotes = [quote(1, 10.0), quote(3, 12.0)];
        let series = fill_missing_days(&quotes, day(1), day(5));

        let rates: Vec<Option<f64>> = series.days.iter().map(|d| d.rate).collect();
        assert_eq!(
            rates,
            vec![Some(10.0), Some(10.0), Some(12.0), Some(12.0), Some(12.0)]
        );
        assert_eq!(series.observed, 2);
        assert_eq!(series.carried, 3);
        assert!(!series.days[0].carried);
        assert!(series.days[1].carried);
        assert!(!series.days[2].carried);
    }

    #[test]
    fn test_leading_days_stay_undefined() {
        let quotes = [quote(3, 12.0)];
        let series = fill_missing_days(&quotes, day(1), day(5));

        let rates: Vec<Option<f64>> = series.days.iter().map(|d| d.rate).collect();
        assert_eq!(rates, vec![None, None, Some(12.0), Some(12.0), Some(12.0)]);
        assert_eq!(series.observed, 1);
        assert_eq!(series.carried, 2);
        assert!(!series.days[0].carried);
        assert!(!series.days[1].carried);
    }

    #[test]
    fn test_no_gaps_means_nothing_carried() {
        let quotes = [quote(1, 1.0), quote(2, 2.0), quote(3, 3.0)];
        let series = fill_missing_days(&quotes, day(1), day(3));
        assert_eq!(series.observed, 3);
        assert_eq!(series.carried, 0);
    }

    #[test]
    fn test_covers_every_day_in_range() {
        let series = fill_missing_days(&[quote(10, 4.2)], day(1), day(28));
        assert_eq!(series.days.len(), 28);
        assert_eq!(series.days[0].day, day(1));
        assert_eq!(series.days[27].day, day(28));
    }

    #[test]
    fn test_rate_stats() {
        let quotes = [quote(1, 10.0), quote(3, 12.0)];
        let series = fill_missing_days(&quotes, day(1), day(5));
        let stats = rate_stats(&series).expect("stats");
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 12.0);
        // [10, 10, 12, 12, 12]
        assert!((stats.mean - 11.2).abs() < 1e-12);
    }

    #[test]
    fn test_rate_stats_without_any_rate() {
        let series = fill_missing_days(&[], day(1), day(3));
        assert!(rate_stats(&series).is_none());
    }
}
