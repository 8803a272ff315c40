//! Input Format Constants
//!
//! Defines the expected column layout of per-symbol price files and the
//! moving-average periods used for standard chart overlays.
//!
//! Source files are comma-delimited with one header row:
//!
//! ```text
//! Date,Open,High,Low,Close,Adj Close,Volume
//! ```
//!
//! Columns are resolved by header name, not position, so reordered files
//! still parse as long as the required headers are present.

/// Date format used in source files and ingestion parameters
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of required columns per row
pub const REQUIRED_COLUMNS: usize = 7;

/// Required header names for the daily price format
pub mod csv_header {
    pub const DATE: &str = "Date";
    pub const OPEN: &str = "Open";
    pub const HIGH: &str = "High";
    pub const LOW: &str = "Low";
    pub const CLOSE: &str = "Close";
    pub const ADJ_CLOSE: &str = "Adj Close";
    pub const VOLUME: &str = "Volume";
}

/// SMA periods for the standard chart-overlay set
pub const POPULAR_SMA_PERIODS: &[usize] = &[50, 200];

/// EMA periods for the standard chart-overlay set
pub const POPULAR_EMA_PERIODS: &[usize] = &[9, 20];
