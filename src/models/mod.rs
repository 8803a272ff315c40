mod moving_average;
mod ohlcv;
mod time_series;

pub use moving_average::{MovingAverageKind, MovingAveragePoint, MovingAverageSeries};
pub use ohlcv::OhlcvRecord;
pub use time_series::TimeSeries;

use std::collections::HashMap;

/// Market data collection (symbol -> time series)
pub type MarketData = HashMap<String, TimeSeries>;
