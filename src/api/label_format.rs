use chrono::FixedOffset;

use crate::core::{Bar, timestamp_to_datetime};

/// Formats a value for the line-chart price pill: two decimals from 1 up,
/// four below.
#[must_use]
pub fn format_price(value: f64) -> String {
    if value >= 1.0 {
        format!("${value:.2}")
    } else {
        format!("${value:.4}")
    }
}

#[must_use]
pub fn format_fixed2(value: f64) -> String {
    format!("{value:.2}")
}

/// `HH:MM` of a raw second-or-millisecond timestamp shifted by
/// `utc_offset_minutes`.
///
/// Returns an empty string for timestamps chrono cannot represent or an
/// out-of-range offset.
#[must_use]
pub fn format_hover_time(raw_time: i64, utc_offset_minutes: i32) -> String {
    let Some(offset) = utc_offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
    else {
        return String::new();
    };
    timestamp_to_datetime(raw_time)
        .map(|time| {
            time.with_timezone(&offset)
                .format("%H:%M")
                .to_string()
        })
        .unwrap_or_default()
}

/// Run of the candlestick badge; `dimmed` marks the O/H/L/C field letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeSegment {
    pub text: String,
    pub dimmed: bool,
}

impl BadgeSegment {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            dimmed: false,
        }
    }

    fn dimmed(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            dimmed: true,
        }
    }
}

/// Labelled OHLC fields of the candlestick badge up to the close value, which
/// the caller appends in its own color.
#[must_use]
pub fn ohlc_badge_segments(bar: Bar, time_label: &str) -> Vec<BadgeSegment> {
    let mut segments = vec![BadgeSegment::plain(format!("{time_label}  "))];
    for (label, value) in [("O", bar.open), ("H", bar.high), ("L", bar.low)] {
        segments.push(BadgeSegment::dimmed(label));
        segments.push(BadgeSegment::plain(format!(" {}  ", format_fixed2(value))));
    }
    segments.push(BadgeSegment::dimmed("C"));
    segments.push(BadgeSegment::plain(" "));
    segments
}

/// Average glyph advance relative to font size used for badge sizing.
pub const GLYPH_ADVANCE_RATIO: f64 = 0.6;

/// Width estimate for laying out badge boxes before a backend measures text.
#[must_use]
pub fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    text.chars().count() as f64 * font_size_px * GLYPH_ADVANCE_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_precision_switches_at_one() {
        assert_eq!(format_price(1234.5), "$1234.50");
        assert_eq!(format_price(1.0), "$1.00");
        assert_eq!(format_price(0.123456), "$0.1235");
    }

    #[test]
    fn hover_time_accepts_both_units() {
        // 2023-11-14T22:13:20Z
        assert_eq!(format_hover_time(1_700_000_000, 0), "22:13");
        assert_eq!(format_hover_time(1_700_000_000_000, 0), "22:13");
        assert_eq!(format_hover_time(1_700_000_000, 120), "00:13");
    }

    #[test]
    fn unrepresentable_time_is_blank() {
        assert_eq!(format_hover_time(i64::MAX, 0), "");
        assert_eq!(format_hover_time(0, i32::MAX), "");
    }

    #[test]
    fn badge_segments_dim_only_field_letters() {
        let segments = ohlc_badge_segments(Bar::new(0, 1.0, 2.0, 0.5, 1.5), "10:00");
        let dimmed: Vec<&str> = segments
            .iter()
            .filter(|segment| segment.dimmed)
            .map(|segment| segment.text.as_str())
            .collect();
        assert_eq!(dimmed, ["O", "H", "L", "C"]);
    }
}
