use serde::{Deserialize, Serialize};

use crate::core::{Bar, Point};

/// Fraction of the value range added above and below a line series.
pub const LINE_DOMAIN_HEADROOM: f64 = 0.05;

/// `[min, max]` range mapped onto the pixel plot height.
///
/// Domains built through the constructors below always satisfy
/// `min < max` with both ends finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Default for Domain {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl Domain {
    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Price domain of a candlestick series: lowest low to highest high.
    ///
    /// Falls back to `[0, 1]` when no finite extreme exists and widens a
    /// zero-width range to one price unit.
    #[must_use]
    pub fn from_bars(bars: &[Bar]) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for bar in bars {
            min = min.min(bar.low);
            max = max.max(bar.high);
        }
        Self::guarded(min, max)
    }

    /// Value domain of a line series with 5% headroom on each side.
    ///
    /// A flat series uses a range of 1 before padding, so `[v, v]` becomes
    /// `[v - 0.05, v + 0.05]`.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for point in points {
            min = min.min(point.value);
            max = max.max(point.value);
        }
        if !min.is_finite() || !max.is_finite() {
            return Self::default();
        }

        let mut range = max - min;
        if range == 0.0 || !range.is_finite() {
            range = 1.0;
        }
        let headroom = range * LINE_DOMAIN_HEADROOM;
        Self::guarded(min - headroom, max + headroom)
    }

    fn guarded(min: f64, max: f64) -> Self {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Self::default();
        }
        // `min + 1.0` can round back to `min` for huge magnitudes.
        let max = if max - min > 0.0 {
            max
        } else if min + 1.0 > min {
            min + 1.0
        } else {
            return Self {
                min,
                max: min + min.abs() * f64::EPSILON * 2.0,
            };
        };
        Self { min, max }
    }

    /// Inverted linear mapping of `value` into `[top, top + height]`.
    #[must_use]
    pub fn to_inverted_pixel(self, value: f64, top: f64, height: f64) -> f64 {
        let normalized = (value - self.min) / self.span();
        top + height - normalized * height
    }
}
