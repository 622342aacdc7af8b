//! Layout engine: viewport + domain -> pixel-space scale functions.
//!
//! Both layouts are plain values recomputed whenever the viewport, padding or
//! data change. None of the mappings can fail; degenerate input produces
//! degenerate but finite coordinates.

use serde::{Deserialize, Serialize};

use crate::core::{Bar, Domain, PixelPoint, Point, Viewport};

/// Ratio of candle body width to slot width.
pub const BAR_WIDTH_RATIO: f64 = 0.66;
pub const MIN_BAR_WIDTH_PX: f64 = 2.0;
pub const MAX_BAR_WIDTH_PX: f64 = 12.0;
/// Gap between the price plot and the volume band.
pub const VOLUME_BAND_GAP_PX: f64 = 6.0;
/// Vertical space of the volume area not used by bars (gap above + margin below).
pub const VOLUME_BAND_INSET_PX: f64 = 12.0;
pub const GRID_LINE_COUNT: usize = 5;

fn sanitize_len(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Pixel layout of a candlestick + volume chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleLayout {
    pub viewport: Viewport,
    pub padding: f64,
    pub plot_width: f64,
    pub plot_height: f64,
    pub slot_width: f64,
    pub bar_width: f64,
    pub series_len: usize,
    pub price_domain: Domain,
    pub max_volume: f64,
    pub volume_top: f64,
    pub volume_band_height: f64,
}

impl CandleLayout {
    #[must_use]
    pub fn new(viewport: Viewport, padding: f64, volume_height: f64, bars: &[Bar]) -> Self {
        let width = sanitize_len(viewport.width);
        let height = sanitize_len(viewport.height);
        let padding = sanitize_len(padding);
        let volume_height = sanitize_len(volume_height);

        let plot_width = (width - padding * 2.0).max(1.0);
        let plot_height = (height - volume_height - padding * 2.0).max(1.0);
        let slot_width = plot_width / bars.len().max(1) as f64;
        let bar_width =
            (slot_width * BAR_WIDTH_RATIO).clamp(MIN_BAR_WIDTH_PX, MAX_BAR_WIDTH_PX);

        let max_volume = bars
            .iter()
            .map(|bar| bar.volume_or_zero())
            .fold(0.0, f64::max);

        Self {
            viewport: Viewport::new(width, height),
            padding,
            plot_width,
            plot_height,
            slot_width,
            bar_width,
            series_len: bars.len(),
            price_domain: Domain::from_bars(bars),
            max_volume,
            volume_top: padding + plot_height + VOLUME_BAND_GAP_PX,
            volume_band_height: (volume_height - VOLUME_BAND_INSET_PX).max(0.0),
        }
    }

    #[must_use]
    pub fn price_to_y(&self, price: f64) -> f64 {
        self.price_domain
            .to_inverted_pixel(price, self.padding, self.plot_height)
    }

    #[must_use]
    pub fn plot_bottom(&self) -> f64 {
        self.padding + self.plot_height
    }

    #[must_use]
    pub fn plot_right(&self) -> f64 {
        self.viewport.width - self.padding
    }

    #[must_use]
    pub fn slot_left(&self, index: usize) -> f64 {
        self.padding + index as f64 * self.slot_width
    }

    #[must_use]
    pub fn slot_center_x(&self, index: usize) -> f64 {
        self.padding + (index as f64 + 0.5) * self.slot_width
    }

    #[must_use]
    pub fn volume_bottom(&self) -> f64 {
        self.volume_top + self.volume_band_height
    }

    /// Top edge of a volume bar, scaled against the largest volume (at least 1).
    #[must_use]
    pub fn volume_to_y(&self, volume: f64) -> f64 {
        let ratio = volume / self.max_volume.max(1.0);
        self.volume_top + (1.0 - ratio) * self.volume_band_height
    }

    /// Y of the evenly spaced horizontal grid lines, top to bottom.
    #[must_use]
    pub fn grid_line_ys(&self) -> [f64; GRID_LINE_COUNT] {
        std::array::from_fn(|k| {
            self.padding + self.plot_height * (k + 1) as f64 / GRID_LINE_COUNT as f64
        })
    }

    /// Inverse mapping used by the pointer tracker: pixel x -> slot index.
    ///
    /// The pointer is clamped into the plot first, so positions left of the
    /// plot resolve to the first bar and right of it to the last one.
    #[must_use]
    pub fn slot_index_at(&self, pixel_x: f64) -> Option<usize> {
        if self.series_len == 0 {
            return None;
        }
        let x = pixel_x.max(self.padding).min(self.plot_right());
        let raw = ((x - self.padding) / self.slot_width - 0.5).round();
        let last = self.series_len - 1;
        if raw.is_nan() || raw <= 0.0 {
            return Some(0);
        }
        Some((raw as usize).min(last))
    }
}

/// Pixel layout of a smoothed line chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineLayout {
    pub viewport: Viewport,
    pub padding: f64,
    pub min_time: i64,
    pub max_time: i64,
    pub value_domain: Domain,
}

impl LineLayout {
    /// Time extent is taken from the first and last sample, which assumes an
    /// ascending series.
    #[must_use]
    pub fn new(viewport: Viewport, padding: f64, points: &[Point]) -> Self {
        let (min_time, max_time) = match (points.first(), points.last()) {
            (Some(first), Some(last)) => (first.time, last.time),
            _ => (0, 0),
        };
        Self {
            viewport: Viewport::new(sanitize_len(viewport.width), sanitize_len(viewport.height)),
            padding: sanitize_len(padding),
            min_time,
            max_time,
            value_domain: Domain::from_points(points),
        }
    }

    /// Collapses to the left padding when all samples share one timestamp.
    #[must_use]
    pub fn time_to_x(&self, time: i64) -> f64 {
        if self.max_time == self.min_time {
            return self.padding;
        }
        let span = self.max_time as f64 - self.min_time as f64;
        let pct = (time as f64 - self.min_time as f64) / span;
        self.padding + pct * (self.viewport.width - self.padding * 2.0)
    }

    #[must_use]
    pub fn value_to_y(&self, value: f64) -> f64 {
        self.value_domain.to_inverted_pixel(
            value,
            self.padding,
            self.viewport.height - self.padding * 2.0,
        )
    }

    #[must_use]
    pub fn plot_top(&self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn plot_bottom(&self) -> f64 {
        self.viewport.height - self.padding
    }

    #[must_use]
    pub fn project(&self, point: Point) -> PixelPoint {
        PixelPoint::new(self.time_to_x(point.time), self.value_to_y(point.value))
    }

    #[must_use]
    pub fn project_all(&self, points: &[Point]) -> Vec<PixelPoint> {
        points.iter().map(|point| self.project(*point)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bars() -> Vec<Bar> {
        vec![
            Bar::new(0, 10.0, 12.0, 9.0, 11.0).with_volume(100.0),
            Bar::new(60, 11.0, 11.0, 8.0, 9.0).with_volume(50.0),
        ]
    }

    #[test]
    fn slot_and_bar_width_follow_viewport() {
        let layout = CandleLayout::new(Viewport::new(100.0, 280.0), 10.0, 56.0, &bars());
        assert!((layout.slot_width - 40.0).abs() <= 1e-12);
        assert!((layout.bar_width - 12.0).abs() <= 1e-12);
        assert!((layout.plot_height - 204.0).abs() <= 1e-12);
    }

    #[test]
    fn bar_width_has_two_pixel_floor() {
        let many: Vec<Bar> = (0..500).map(|i| Bar::new(i, 1.0, 2.0, 0.5, 1.5)).collect();
        let layout = CandleLayout::new(Viewport::new(300.0, 280.0), 14.0, 56.0, &many);
        assert_eq!(layout.bar_width, MIN_BAR_WIDTH_PX);
    }

    #[test]
    fn volume_scale_maps_max_volume_to_band_top() {
        let layout = CandleLayout::new(Viewport::new(100.0, 280.0), 10.0, 56.0, &bars());
        assert!((layout.volume_to_y(100.0) - layout.volume_top).abs() <= 1e-12);
        assert!((layout.volume_to_y(0.0) - layout.volume_bottom()).abs() <= 1e-12);
    }

    #[test]
    fn narrow_viewport_does_not_panic_on_clamp() {
        let layout = CandleLayout::new(Viewport::new(10.0, 50.0), 14.0, 56.0, &bars());
        assert_eq!(layout.slot_index_at(3.0), Some(0));
        assert_eq!(layout.slot_index_at(f64::NAN), Some(0));
    }

    #[test]
    fn line_layout_guards_constant_time() {
        let points = [Point::new(5, 1.0), Point::new(5, 2.0)];
        let layout = LineLayout::new(Viewport::new(200.0, 220.0), 16.0, &points);
        assert_eq!(layout.time_to_x(5), 16.0);
    }
}
