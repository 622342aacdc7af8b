use std::str::FromStr;

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::{Bar, Point};
use crate::error::{ChartError, ChartResult};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const THROTTLE_MESSAGE: &str = "API limit reached. Try again shortly.";

const OPEN_FIELD: &str = "1. open";
const HIGH_FIELD: &str = "2. high";
const LOW_FIELD: &str = "3. low";
const CLOSE_FIELD: &str = "4. close";
const VOLUME_FIELD: &str = "5. volume";

/// Bucket size of an intraday time-series request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IntradayInterval {
    #[default]
    #[serde(rename = "1min")]
    OneMinute,
    #[serde(rename = "5min")]
    FiveMinutes,
    #[serde(rename = "15min")]
    FifteenMinutes,
    #[serde(rename = "30min")]
    ThirtyMinutes,
    #[serde(rename = "60min")]
    SixtyMinutes,
}

impl IntradayInterval {
    pub const ALL: [Self; 5] = [
        Self::OneMinute,
        Self::FiveMinutes,
        Self::FifteenMinutes,
        Self::ThirtyMinutes,
        Self::SixtyMinutes,
    ];

    /// Query-parameter spelling, e.g. `5min`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneMinute => "1min",
            Self::FiveMinutes => "5min",
            Self::FifteenMinutes => "15min",
            Self::ThirtyMinutes => "30min",
            Self::SixtyMinutes => "60min",
        }
    }

    /// Payload key holding the series for this interval.
    #[must_use]
    pub fn series_key(self) -> String {
        format!("Time Series ({})", self.as_str())
    }

    #[must_use]
    pub fn duration_seconds(self) -> i64 {
        match self {
            Self::OneMinute => 60,
            Self::FiveMinutes => 300,
            Self::FifteenMinutes => 900,
            Self::ThirtyMinutes => 1_800,
            Self::SixtyMinutes => 3_600,
        }
    }
}

/// Parses a raw intraday response body into ascending bars.
pub fn parse_intraday_json(input: &str) -> ChartResult<Vec<Bar>> {
    let payload: Value = serde_json::from_str(input)?;
    parse_intraday_value(&payload)
}

/// Converts a decoded intraday response into ascending bars with millisecond
/// UTC timestamps.
///
/// Throttle and error envelopes become [`ChartError::Upstream`]. A payload
/// without any known series key yields an empty series. Rows with an
/// unparsable timestamp or OHLC field are dropped; a missing or unparsable
/// volume reads as zero.
pub fn parse_intraday_value(payload: &Value) -> ChartResult<Vec<Bar>> {
    check_envelope(payload)?;

    let Some(series) = IntradayInterval::ALL
        .iter()
        .find_map(|interval| payload.get(interval.series_key()))
    else {
        debug!("intraday payload carries no time series");
        return Ok(Vec::new());
    };

    let rows: IndexMap<String, Value> = serde_json::from_value(series.clone())?;
    let total = rows.len();
    let mut bars: Vec<Bar> = rows
        .iter()
        .filter_map(|(timestamp, row)| parse_row(timestamp, row))
        .collect();
    bars.sort_by_key(|bar| bar.time);

    let dropped = total - bars.len();
    if dropped > 0 {
        warn!(dropped, total, "dropped malformed intraday rows");
    }
    debug!(count = bars.len(), "parsed intraday series");
    Ok(bars)
}

/// Close series of `bars`, for feeding the line chart.
#[must_use]
pub fn bars_to_points(bars: &[Bar]) -> Vec<Point> {
    bars.iter()
        .map(|bar| Point::new(bar.time, bar.close))
        .collect()
}

fn check_envelope(payload: &Value) -> ChartResult<()> {
    if payload.get("Note").is_some() {
        return Err(ChartError::Upstream(THROTTLE_MESSAGE.to_owned()));
    }
    for key in ["Information", "Error Message"] {
        if let Some(message) = payload.get(key) {
            let message = message
                .as_str()
                .map_or_else(|| message.to_string(), str::to_owned);
            return Err(ChartError::Upstream(message));
        }
    }
    Ok(())
}

fn parse_row(timestamp: &str, row: &Value) -> Option<Bar> {
    let time = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
        .ok()?
        .and_utc();
    let volume = decimal_field(row, VOLUME_FIELD).unwrap_or(Decimal::ZERO);
    Bar::from_decimal_time(
        time,
        decimal_field(row, OPEN_FIELD)?,
        decimal_field(row, HIGH_FIELD)?,
        decimal_field(row, LOW_FIELD)?,
        decimal_field(row, CLOSE_FIELD)?,
        Some(volume),
    )
    .ok()
}

/// Accepts both string-encoded and plain JSON numbers.
fn decimal_field(row: &Value, field: &str) -> Option<Decimal> {
    match row.get(field)? {
        Value::String(text) => Decimal::from_str(text.trim()).ok(),
        Value::Number(number) => number
            .as_f64()
            .and_then(|value| Decimal::from_str(&value.to_string()).ok()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_field_reads_strings_and_numbers() {
        let row = serde_json::json!({ "a": " 12.50 ", "b": 3.25, "c": "n/a", "d": null });
        assert_eq!(decimal_field(&row, "a"), Some(Decimal::new(1250, 2)));
        assert_eq!(decimal_field(&row, "b"), Some(Decimal::new(325, 2)));
        assert_eq!(decimal_field(&row, "c"), None);
        assert_eq!(decimal_field(&row, "d"), None);
        assert_eq!(decimal_field(&row, "missing"), None);
    }

    #[test]
    fn series_keys_follow_interval_spelling() {
        assert_eq!(
            IntradayInterval::FifteenMinutes.series_key(),
            "Time Series (15min)"
        );
        assert_eq!(IntradayInterval::default().as_str(), "1min");
    }
}
