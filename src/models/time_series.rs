use crate::models::OhlcvRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar-indexed price series for a single symbol
///
/// Invariant: record dates are strictly increasing with no duplicates.
/// Construction enforces this by sorting ascending and keeping the first
/// record of any duplicated date, so recurrence consumers can rely on
/// positional order matching calendar order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeSeries {
    records: Vec<OhlcvRecord>,
}

impl TimeSeries {
    /// Build a series from raw records, keeping only dates in `(start_date, end_date]`
    ///
    /// The interval is exclusive of `start_date` and inclusive of
    /// `end_date`: a record dated exactly `start_date` is dropped.
    pub fn from_records(
        records: Vec<OhlcvRecord>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        let mut records: Vec<OhlcvRecord> = records
            .into_iter()
            .filter(|r| r.date > start_date && r.date <= end_date)
            .collect();

        // Sources are assumed ascending; unordered input is re-sorted and
        // duplicate dates collapse to their first record
        records.sort_by_key(|r| r.date);
        records.dedup_by_key(|r| r.date);

        Self { records }
    }

    /// Number of records in the series
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the series holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in calendar order
    pub fn records(&self) -> &[OhlcvRecord] {
        &self.records
    }

    /// Record at position `index`, if present
    pub fn get(&self, index: usize) -> Option<&OhlcvRecord> {
        self.records.get(index)
    }

    /// Earliest record in the series
    pub fn first(&self) -> Option<&OhlcvRecord> {
        self.records.first()
    }

    /// Latest record in the series
    pub fn last(&self) -> Option<&OhlcvRecord> {
        self.records.last()
    }

    /// Trading dates in calendar order
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.records.iter().map(|r| r.date).collect()
    }

    /// Closing prices in calendar order
    pub fn closes(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.close).collect()
    }

    /// Adjusted closing prices in calendar order
    pub fn adj_closes(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.adj_close).collect()
    }

    /// Trading volumes in calendar order
    pub fn volumes(&self) -> Vec<u64> {
        self.records.iter().map(|r| r.volume).collect()
    }
}
