use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_millis, decimal_to_f64};
use crate::error::ChartResult;

/// Host-measured drawing area in logical pixels.
///
/// Hosts report layout sizes as floats, so zero or negative sizes are
/// representable; the layout engine treats them as degenerate, not as errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// One OHLC(V) observation for a fixed time bucket.
///
/// `low <= min(open, close) <= max(open, close) <= high` is expected but not
/// enforced: upstream data is projected as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Epoch seconds or epoch milliseconds, see [`crate::core::TimestampUnit`].
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl Bar {
    #[must_use]
    pub fn new(time: i64, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume: None,
        }
    }

    #[must_use]
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    /// Converts typed temporal/decimal input into a bar with a millisecond timestamp.
    pub fn from_decimal_time(
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: Option<Decimal>,
    ) -> ChartResult<Self> {
        Ok(Self {
            time: datetime_to_unix_millis(time),
            open: decimal_to_f64(open, "open")?,
            high: decimal_to_f64(high, "high")?,
            low: decimal_to_f64(low, "low")?,
            close: decimal_to_f64(close, "close")?,
            volume: volume.map(|v| decimal_to_f64(v, "volume")).transpose()?,
        })
    }

    /// `true` when close is greater than or equal to open. Flat bars count as up.
    #[must_use]
    pub fn is_up(self) -> bool {
        self.close >= self.open
    }

    /// Volume with a missing or negative value read as zero.
    #[must_use]
    pub fn volume_or_zero(self) -> f64 {
        match self.volume {
            Some(v) if v.is_finite() && v > 0.0 => v,
            _ => 0.0,
        }
    }
}

/// One sample of a line series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub time: i64,
    pub value: f64,
}

impl Point {
    #[must_use]
    pub fn new(time: i64, value: f64) -> Self {
        Self { time, value }
    }
}

/// A data sample already projected into pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
