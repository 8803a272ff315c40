//! Moving-average engine
//!
//! Computes SMA and EMA series from a single price series. Both indicators
//! use lagged-window labelling: the value computed from close prices at
//! positions `[i, i + period)` is dated `dates[period + i]`, one full
//! period after the window. The averaged window never includes the close
//! at its own label date. Chart overlays depend on this exact alignment.

use crate::constants::{POPULAR_EMA_PERIODS, POPULAR_SMA_PERIODS};
use crate::error::{Error, Result};
use crate::models::{MovingAverageKind, MovingAveragePoint, MovingAverageSeries, TimeSeries};

/// Calculate the simple moving average for a given period
///
/// Output position `i` carries the mean of closes `[i, i + period)` and is
/// dated `dates[period + i]`. Output length is `series.len() - period`;
/// when `period >= series.len()` the result is an empty series.
pub fn sma(series: &TimeSeries, period: usize) -> Result<MovingAverageSeries> {
    validate_period(period)?;

    let closes = series.closes();
    let dates = series.dates();

    let mut points = Vec::new();
    if period < closes.len() {
        let output_len = closes.len() - period;
        points.reserve(output_len);

        for (i, window) in closes.windows(period).take(output_len).enumerate() {
            let sum: f64 = window.iter().sum();
            points.push(MovingAveragePoint {
                date: dates[period + i],
                value: sum / period as f64,
            });
        }
    }

    Ok(MovingAverageSeries::new(
        MovingAverageKind::Simple,
        period,
        points,
    ))
}

/// Calculate the exponential moving average for a given period
///
/// The recurrence is seeded with the mean of the first `period` closes
/// (the first SMA value) and smoothed with `k = 2 / (period + 1)`:
///
/// ```text
/// EMA[0] = (close[period] - seed) * k + seed
/// EMA[i] = (close[period + i] - EMA[i-1]) * k + EMA[i-1]
/// ```
///
/// Dates and output length match [`sma`] for the same inputs; when
/// `period >= series.len()` the result is an empty series.
pub fn ema(series: &TimeSeries, period: usize) -> Result<MovingAverageSeries> {
    validate_period(period)?;

    let closes = series.closes();
    let dates = series.dates();

    let mut points = Vec::new();
    if period < closes.len() {
        let k = 2.0 / (period as f64 + 1.0);
        let seed: f64 = closes[..period].iter().sum::<f64>() / period as f64;

        points.reserve(closes.len() - period);
        let mut prev = seed;
        for i in period..closes.len() {
            let value = (closes[i] - prev) * k + prev;
            points.push(MovingAveragePoint {
                date: dates[i],
                value,
            });
            prev = value;
        }
    }

    Ok(MovingAverageSeries::new(
        MovingAverageKind::Exponential,
        period,
        points,
    ))
}

/// Compute the standard chart-overlay set: 50/200-period SMA and 9/20-period EMA
pub fn popular_overlays(series: &TimeSeries) -> Result<Vec<MovingAverageSeries>> {
    let mut overlays = Vec::with_capacity(POPULAR_SMA_PERIODS.len() + POPULAR_EMA_PERIODS.len());

    for &period in POPULAR_SMA_PERIODS {
        overlays.push(sma(series, period)?);
    }
    for &period in POPULAR_EMA_PERIODS {
        overlays.push(ema(series, period)?);
    }

    Ok(overlays)
}

fn validate_period(period: usize) -> Result<()> {
    if period < 1 {
        return Err(Error::InvalidInput(
            "moving average period must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OhlcvRecord;
    use chrono::NaiveDate;

    /// Ten consecutive trading days with closes 1.0..=10.0
    fn sample_series() -> TimeSeries {
        let records = (0..10)
            .map(|i| {
                let date = NaiveDate::from_ymd_opt(2017, 1, 1).unwrap() + chrono::Days::new(i);
                let close = (i + 1) as f64;
                OhlcvRecord::new(date, close, close, close, close, close, 100)
            })
            .collect();
        TimeSeries::from_records(
            records,
            NaiveDate::from_ymd_opt(2016, 12, 31).unwrap(),
            NaiveDate::from_ymd_opt(2017, 12, 31).unwrap(),
        )
    }

    #[test]
    fn test_sma_lagged_window() {
        let series = sample_series();
        let result = sma(&series, 3).unwrap();

        assert_eq!(result.label, "3-SMA");
        assert_eq!(result.len(), 7);

        // First value is mean(1,2,3), labelled with the fourth date
        assert!((result.points[0].value - 2.0).abs() < f64::EPSILON);
        assert_eq!(result.points[0].date, series.dates()[3]);

        // Second value is mean(2,3,4), labelled with the fifth date
        assert!((result.points[1].value - 3.0).abs() < f64::EPSILON);
        assert_eq!(result.points[1].date, series.dates()[4]);

        // Last value is mean(7,8,9) - the final close never enters a window
        assert!((result.points[6].value - 8.0).abs() < f64::EPSILON);
        assert_eq!(result.points[6].date, series.dates()[9]);
    }

    #[test]
    fn test_sma_output_length() {
        let series = sample_series();
        for period in 1..series.len() {
            let result = sma(&series, period).unwrap();
            assert_eq!(result.len(), series.len() - period);
        }
    }

    #[test]
    fn test_sma_period_at_or_beyond_length_is_empty() {
        let series = sample_series();
        assert!(sma(&series, 10).unwrap().is_empty());
        assert!(sma(&series, 11).unwrap().is_empty());
        assert!(sma(&TimeSeries::default(), 5).unwrap().is_empty());
    }

    #[test]
    fn test_ema_recurrence() {
        let series = sample_series();
        let result = ema(&series, 3).unwrap();

        assert_eq!(result.label, "3-EMA");
        assert_eq!(result.len(), 7);

        // k = 2/4 = 0.5, seed = mean(1,2,3) = 2.0
        // EMA[0] = (4 - 2.0) * 0.5 + 2.0 = 3.0
        assert!((result.points[0].value - 3.0).abs() < f64::EPSILON);
        assert_eq!(result.points[0].date, series.dates()[3]);

        // EMA[1] = (5 - 3.0) * 0.5 + 3.0 = 4.0
        assert!((result.points[1].value - 4.0).abs() < f64::EPSILON);
        assert_eq!(result.points[1].date, series.dates()[4]);
    }

    #[test]
    fn test_ema_seed_equals_first_sma_value() {
        let series = sample_series();
        let period = 4;

        let sma_first = sma(&series, period).unwrap().points[0].value;
        let ema_first = ema(&series, period).unwrap().points[0].value;

        // Reconstruct the seed from EMA[0] = (close[period] - seed) * k + seed
        let k = 2.0 / (period as f64 + 1.0);
        let close = series.closes()[period];
        let seed = (ema_first - close * k) / (1.0 - k);
        assert!((seed - sma_first).abs() < 1e-9);
    }

    #[test]
    fn test_ema_matches_sma_policy_when_underfull() {
        let series = sample_series();
        assert!(ema(&series, 10).unwrap().is_empty());
        assert!(ema(&series, 11).unwrap().is_empty());
    }

    #[test]
    fn test_ema_output_length_matches_sma() {
        let series = sample_series();
        for period in 1..=series.len() {
            let s = sma(&series, period).unwrap();
            let e = ema(&series, period).unwrap();
            assert_eq!(s.len(), e.len());
            assert_eq!(s.dates(), e.dates());
        }
    }

    #[test]
    fn test_zero_period_is_invalid() {
        let series = sample_series();
        assert!(matches!(sma(&series, 0), Err(Error::InvalidInput(_))));
        assert!(matches!(ema(&series, 0), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_idempotence() {
        let series = sample_series();
        assert_eq!(sma(&series, 3).unwrap(), sma(&series, 3).unwrap());
        assert_eq!(ema(&series, 3).unwrap(), ema(&series, 3).unwrap());
    }

    #[test]
    fn test_popular_overlays_labels() {
        let series = sample_series();
        let overlays = popular_overlays(&series).unwrap();

        let labels: Vec<&str> = overlays.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["50-SMA", "200-SMA", "9-EMA", "20-EMA"]);

        // Sample series is shorter than every popular period
        assert!(overlays.iter().all(|o| o.is_empty()));
    }
}
