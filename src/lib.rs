//! Daily OHLCV ingestion and moving-average trend engine
//!
//! Parses per-symbol price files into calendar-aligned series, computes
//! SMA/EMA chart overlays with lagged-window labelling, and projects OHLC
//! data into ordinal-numeric candles for rendering layers.

pub mod analysis;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use analysis::{ema, popular_overlays, project, sma, CandlePoint};
pub use error::{Error, Result};
pub use models::{
    MarketData, MovingAverageKind, MovingAveragePoint, MovingAverageSeries, OhlcvRecord,
    TimeSeries,
};
pub use services::{
    directory_sources, ingest, ingest_dir, load_series, FileSource, MemorySource, RecordSource,
};
pub use utils::parse_date;
