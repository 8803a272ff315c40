use crate::constants::DATE_FORMAT;
use crate::error::{Error, Result};
use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` date string into a calendar date
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|e| Error::Parse(format!("Invalid date '{}': {}", s, e)))
}
