pub mod candlestick;
pub mod moving_average;

pub use candlestick::{project, CandlePoint};
pub use moving_average::{ema, popular_overlays, sma};
