//! Time-series ingestion
//!
//! Parses named sources into per-symbol calendar-aligned series. Columns
//! are resolved from the header row by name; rows are filtered to the
//! half-open interval `(start_date, end_date]`. A malformed source fails
//! on its own and never aborts the rest of a batch.

use crate::constants::csv_header;
use crate::error::{Error, Result};
use crate::models::{MarketData, OhlcvRecord, TimeSeries};
use crate::services::source::RecordSource;
use crate::utils::parse_date;
use chrono::NaiveDate;
use std::fmt::Display;
use std::str::FromStr;
use tracing::{debug, error};

/// Resolved positions of the required columns within a header row
struct ColumnIndex {
    date: usize,
    open: usize,
    high: usize,
    low: usize,
    close: usize,
    adj_close: usize,
    volume: usize,
}

/// Normalize a header cell for name matching (case and internal
/// whitespace insensitive, so `Adj Close` and `AdjClose` both resolve)
fn header_key(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord, symbol: &str) -> Result<Self> {
        let keys: Vec<String> = headers.iter().map(header_key).collect();
        let find = |name: &str| -> Result<usize> {
            keys.iter()
                .position(|key| *key == header_key(name))
                .ok_or_else(|| Error::Schema(format!("{}: missing '{}' column", symbol, name)))
        };

        Ok(Self {
            date: find(csv_header::DATE)?,
            open: find(csv_header::OPEN)?,
            high: find(csv_header::HIGH)?,
            low: find(csv_header::LOW)?,
            close: find(csv_header::CLOSE)?,
            adj_close: find(csv_header::ADJ_CLOSE)?,
            volume: find(csv_header::VOLUME)?,
        })
    }
}

fn get_field<'a>(row: &'a csv::StringRecord, index: usize, name: &str) -> Result<&'a str> {
    row.get(index)
        .ok_or_else(|| Error::Parse(format!("Missing {} field", name)))
}

fn parse_field<T>(row: &csv::StringRecord, index: usize, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = get_field(row, index, name)?;
    raw.trim()
        .parse()
        .map_err(|e| Error::Parse(format!("Invalid {} '{}': {}", name, raw, e)))
}

fn parse_row(row: &csv::StringRecord, columns: &ColumnIndex) -> Result<OhlcvRecord> {
    let date = parse_date(get_field(row, columns.date, csv_header::DATE)?)?;
    let open = parse_field(row, columns.open, csv_header::OPEN)?;
    let high = parse_field(row, columns.high, csv_header::HIGH)?;
    let low = parse_field(row, columns.low, csv_header::LOW)?;
    let close = parse_field(row, columns.close, csv_header::CLOSE)?;
    let adj_close = parse_field(row, columns.adj_close, csv_header::ADJ_CLOSE)?;
    let volume = parse_field(row, columns.volume, csv_header::VOLUME)?;

    Ok(OhlcvRecord::new(
        date, open, high, low, close, adj_close, volume,
    ))
}

/// Parse one source into a series filtered to `(start_date, end_date]`
///
/// A missing required column is a schema error; a row with a missing or
/// non-parseable field is a parse error. Either fails the whole source.
pub fn load_series<S: RecordSource + ?Sized>(
    source: &S,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<TimeSeries> {
    let mut reader = csv::Reader::from_reader(source.open()?);

    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::resolve(&headers, source.symbol())?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(parse_row(&row, &columns)?);
    }

    Ok(TimeSeries::from_records(records, start_date, end_date))
}

/// Ingest a batch of sources into a symbol -> series mapping
///
/// A failed source is logged and omitted from the mapping; the batch
/// continues. Callers needing the per-symbol error use [`load_series`].
pub fn ingest<S: RecordSource>(
    sources: &[S],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> MarketData {
    let mut data = MarketData::new();

    for source in sources {
        match load_series(source, start_date, end_date) {
            Ok(series) => {
                debug!(
                    symbol = source.symbol(),
                    records = series.len(),
                    "Loaded series"
                );
                data.insert(source.symbol().to_string(), series);
            }
            Err(e) => {
                error!(
                    symbol = source.symbol(),
                    error = %e,
                    "Failed to ingest symbol, skipping"
                );
            }
        }
    }

    data
}

/// Ingest every file in a directory, one symbol per file
pub fn ingest_dir<P: AsRef<std::path::Path>>(
    dir: P,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<MarketData> {
    let sources = crate::services::source::directory_sources(dir)?;
    Ok(ingest(&sources, start_date, end_date))
}
