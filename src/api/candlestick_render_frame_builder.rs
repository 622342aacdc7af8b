use tracing::warn;

use crate::core::{CandleDirection, project_candles, project_volume_bars};
use crate::render::{CanvasLayerKind, Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer};

use super::CandleChart;

const WICK_WIDTH_PX: f64 = 1.0;
const GRID_LINE_WIDTH_PX: f64 = 1.0;

impl<R: Renderer> CandleChart<R> {
    /// Background, grid, candles and volume bars.
    ///
    /// An empty series still yields background and grid so the card keeps its
    /// shape while data loads.
    #[must_use]
    pub fn build_static_frame(&self) -> RenderFrame {
        let viewport = self.viewport();
        let layout = self.layout();
        let theme = self.config().theme;
        let mut frame = RenderFrame::new(viewport);

        frame.push_rect(
            CanvasLayerKind::Background,
            RectPrimitive::new(0.0, 0.0, viewport.width, viewport.height, theme.card),
        );

        for y in layout.grid_line_ys() {
            frame.push_line(
                CanvasLayerKind::Grid,
                LinePrimitive::new(
                    layout.padding,
                    y,
                    layout.plot_right(),
                    y,
                    GRID_LINE_WIDTH_PX,
                    theme.border,
                ),
            );
        }

        let direction_color = |direction: CandleDirection| -> Color {
            match direction {
                CandleDirection::Up => theme.up,
                CandleDirection::Down => theme.down,
            }
        };

        let mut skipped = 0_usize;
        for candle in project_candles(self.bars(), layout) {
            if !candle.is_finite() {
                skipped += 1;
                continue;
            }
            let color = direction_color(candle.direction);
            frame.push_line(
                CanvasLayerKind::Series,
                LinePrimitive::new(
                    candle.center_x,
                    candle.wick_top,
                    candle.center_x,
                    candle.wick_bottom,
                    WICK_WIDTH_PX,
                    color,
                ),
            );
            frame.push_rect(
                CanvasLayerKind::Series,
                RectPrimitive::new(
                    candle.body_left,
                    candle.body_top,
                    candle.body_width,
                    candle.body_height,
                    color,
                ),
            );
        }

        for bar in project_volume_bars(self.bars(), layout) {
            if !bar.is_finite() {
                skipped += 1;
                continue;
            }
            frame.push_rect(
                CanvasLayerKind::Volume,
                RectPrimitive::new(
                    bar.left,
                    bar.top,
                    bar.width,
                    bar.height,
                    direction_color(bar.direction),
                ),
            );
        }

        if skipped > 0 {
            warn!(skipped, "skipped candle primitives with non-finite prices");
        }

        frame
    }
}
