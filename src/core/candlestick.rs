use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{Bar, CandleLayout};

/// Floor applied to candle body height so flat bars stay visible.
pub const MIN_BODY_HEIGHT_PX: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandleDirection {
    Up,
    Down,
}

impl CandleDirection {
    /// Ties go to `Up`.
    #[must_use]
    pub fn of(bar: Bar) -> Self {
        if bar.is_up() { Self::Up } else { Self::Down }
    }
}

/// Projected candle geometry in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleGeometry {
    pub center_x: f64,
    pub body_left: f64,
    pub body_top: f64,
    pub body_width: f64,
    pub body_height: f64,
    pub wick_top: f64,
    pub wick_bottom: f64,
    pub direction: CandleDirection,
}

impl CandleGeometry {
    /// `false` when a non-finite price leaked into the projection.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [
            self.center_x,
            self.body_left,
            self.body_top,
            self.body_width,
            self.body_height,
            self.wick_top,
            self.wick_bottom,
        ]
        .iter()
        .all(|value| value.is_finite())
    }
}

/// Projected volume bar in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeBarGeometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub direction: CandleDirection,
}

impl VolumeBarGeometry {
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [self.left, self.top, self.width, self.height]
            .iter()
            .all(|value| value.is_finite())
    }
}

/// Projects bars into candle geometry, one entry per bar in input order.
///
/// Bars are placed by index, not by timestamp, so gaps in the time axis do
/// not produce gaps on screen.
#[must_use]
pub fn project_candles(bars: &[Bar], layout: &CandleLayout) -> Vec<CandleGeometry> {
    #[cfg(feature = "parallel-projection")]
    {
        bars.par_iter()
            .enumerate()
            .map(|(index, bar)| project_single_candle(index, *bar, layout))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        bars.iter()
            .enumerate()
            .map(|(index, bar)| project_single_candle(index, *bar, layout))
            .collect()
    }
}

fn project_single_candle(index: usize, bar: Bar, layout: &CandleLayout) -> CandleGeometry {
    let center_x = layout.slot_center_x(index);
    let open_y = layout.price_to_y(bar.open);
    let close_y = layout.price_to_y(bar.close);

    CandleGeometry {
        center_x,
        body_left: center_x - layout.bar_width / 2.0,
        body_top: open_y.min(close_y),
        body_width: layout.bar_width,
        body_height: (close_y - open_y).abs().max(MIN_BODY_HEIGHT_PX),
        wick_top: layout.price_to_y(bar.high),
        wick_bottom: layout.price_to_y(bar.low),
        direction: CandleDirection::of(bar),
    }
}

/// Projects bar volumes into the band below the price plot.
///
/// Missing volume draws a zero-height bar at the band bottom.
#[must_use]
pub fn project_volume_bars(bars: &[Bar], layout: &CandleLayout) -> Vec<VolumeBarGeometry> {
    let inset = (layout.slot_width - layout.bar_width) / 2.0;
    let bottom = layout.volume_bottom();
    bars.iter()
        .enumerate()
        .map(|(index, bar)| {
            let top = layout.volume_to_y(bar.volume_or_zero());
            VolumeBarGeometry {
                left: layout.slot_left(index) + inset,
                top,
                width: layout.bar_width,
                height: bottom - top,
                direction: CandleDirection::of(*bar),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Viewport;

    #[test]
    fn nan_open_keeps_body_height_floor() {
        let bars = [Bar::new(0, f64::NAN, 2.0, 1.0, 1.5)];
        let layout = CandleLayout::new(Viewport::new(100.0, 200.0), 10.0, 40.0, &bars);
        let candle = project_candles(&bars, &layout)[0];
        assert_eq!(candle.body_height, MIN_BODY_HEIGHT_PX);
        assert_eq!(candle.direction, CandleDirection::Down);
    }
}
