use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smoothing family of a moving-average series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovingAverageKind {
    /// Unweighted mean of a fixed-size window
    Simple,
    /// Recursively smoothed mean weighting recent prices more heavily
    Exponential,
}

impl MovingAverageKind {
    /// Label suffix for this kind
    pub fn suffix(&self) -> &'static str {
        match self {
            MovingAverageKind::Simple => "SMA",
            MovingAverageKind::Exponential => "EMA",
        }
    }
}

impl fmt::Display for MovingAverageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

/// One dated indicator value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingAveragePoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Dated moving-average output for one symbol and period
///
/// Dates are a suffix of the source series' dates, offset by `period`
/// positions; the label matches chart legend entries (`"50-SMA"`, `"9-EMA"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingAverageSeries {
    /// Legend label encoding kind and period, e.g. `"200-SMA"`
    pub label: String,

    /// Indicator values in calendar order
    pub points: Vec<MovingAveragePoint>,
}

impl MovingAverageSeries {
    /// Create a labelled series from computed points
    pub fn new(kind: MovingAverageKind, period: usize, points: Vec<MovingAveragePoint>) -> Self {
        Self {
            label: format!("{}-{}", period, kind.suffix()),
            points,
        }
    }

    /// Number of points in the series
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the series holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Indicator values in calendar order
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Label dates in calendar order
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }
}
