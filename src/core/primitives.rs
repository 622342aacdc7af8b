use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Raw timestamps above this magnitude are read as epoch milliseconds.
///
/// Epoch seconds only cross it around the year 33658 and epoch milliseconds
/// fall below it before September 2001, so pre-2001 millisecond data is
/// misread as seconds.
pub const MILLIS_THRESHOLD: i64 = 1_000_000_000_000;

/// Resolution inferred for a raw timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampUnit {
    Seconds,
    Milliseconds,
}

impl TimestampUnit {
    #[must_use]
    pub fn infer(raw: i64) -> Self {
        if raw > MILLIS_THRESHOLD {
            Self::Milliseconds
        } else {
            Self::Seconds
        }
    }
}

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> i64 {
    time.timestamp_millis()
}

/// Normalizes a raw second-or-millisecond timestamp to epoch milliseconds.
#[must_use]
pub fn timestamp_to_unix_millis(raw: i64) -> i64 {
    match TimestampUnit::infer(raw) {
        TimestampUnit::Milliseconds => raw,
        TimestampUnit::Seconds => raw.saturating_mul(1_000),
    }
}

/// Resolves a raw timestamp to a UTC instant.
///
/// Returns `None` when the value is outside chrono's representable range.
#[must_use]
pub fn timestamp_to_datetime(raw: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(timestamp_to_unix_millis(raw))
}
