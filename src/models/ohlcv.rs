use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily OHLCV record for a single symbol
///
/// One row of a source file. Immutable once constructed; derived series
/// never write back into the records they were computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcvRecord {
    /// Trading date of the record
    pub date: NaiveDate,

    /// Opening price
    pub open: f64,

    /// Highest price
    pub high: f64,

    /// Lowest price
    pub low: f64,

    /// Closing price
    pub close: f64,

    /// Closing price adjusted for splits and dividends
    pub adj_close: f64,

    /// Trading volume (number of shares)
    pub volume: u64,
}

impl OhlcvRecord {
    /// Create a new OHLCV record
    pub fn new(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        adj_close: f64,
        volume: u64,
    ) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            adj_close,
            volume,
        }
    }
}
