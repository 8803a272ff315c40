//! Candlestick projection
//!
//! Flattens a price series into ordinal-dated OHLC tuples for numeric
//! chart axes. Volume and adjusted close are consumed separately by the
//! rendering layer and are not projected.

use crate::models::TimeSeries;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// One candle with its date flattened to a chart ordinal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandlePoint {
    /// Day count from the proleptic Gregorian epoch (0001-01-01 = day 1)
    pub ordinal: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// Project a series into ordinal-numeric OHLC tuples
///
/// Pure structural transform: ordering follows the series, an empty
/// series yields an empty vector.
pub fn project(series: &TimeSeries) -> Vec<CandlePoint> {
    series
        .records()
        .iter()
        .map(|r| CandlePoint {
            ordinal: r.date.num_days_from_ce() as f64,
            open: r.open,
            high: r.high,
            low: r.low,
            close: r.close,
        })
        .collect()
}
