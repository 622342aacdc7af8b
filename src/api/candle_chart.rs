use tracing::{debug, warn};

use crate::core::{
    Bar, CandleGeometry, CandleLayout, Viewport, VolumeBarGeometry, project_candles,
    project_volume_bars,
};
use crate::error::ChartResult;
use crate::interaction::{PointerEvent, PointerState, PointerTracker};
use crate::render::{RenderFrame, Renderer};

use super::CandleChartConfig;

/// Candlestick + volume chart with a pan-gesture crosshair.
///
/// The host reports its measured width through [`CandleChart::set_width`]
/// and forwards pan gestures to [`CandleChart::handle_pointer_event`]. The
/// layout is recomputed whenever data, width or configuration change.
pub struct CandleChart<R: Renderer> {
    renderer: R,
    config: CandleChartConfig,
    width: f64,
    bars: Vec<Bar>,
    layout: CandleLayout,
    tracker: PointerTracker,
}

impl<R: Renderer> CandleChart<R> {
    pub fn new(renderer: R, config: CandleChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let width = 0.0;
        Ok(Self {
            renderer,
            config,
            width,
            bars: Vec::new(),
            layout: CandleLayout::new(
                Viewport::new(width, config.height),
                config.padding,
                config.volume_height,
                &[],
            ),
            tracker: PointerTracker::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> CandleChartConfig {
        self.config
    }

    pub fn set_config(&mut self, config: CandleChartConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        self.refresh_layout();
        Ok(())
    }

    /// Replaces the series. Bars are expected in ascending time order.
    pub fn set_data(&mut self, bars: Vec<Bar>) {
        let unordered = bars.windows(2).filter(|pair| pair[1].time < pair[0].time).count();
        if unordered > 0 {
            warn!(unordered, "candle series is not sorted by time");
        }
        debug!(count = bars.len(), "set candle data");
        self.bars = bars;
        self.tracker.reset();
        self.refresh_layout();
    }

    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// `true` when there is nothing to plot; hosts show their empty state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Updates the measured container width. Non-finite widths count as zero.
    pub fn set_width(&mut self, width: f64) {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        if width != self.width {
            debug!(width, "candle chart resized");
            self.width = width;
            self.refresh_layout();
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.config.height)
    }

    #[must_use]
    pub fn layout(&self) -> &CandleLayout {
        &self.layout
    }

    #[must_use]
    pub fn candle_geometry(&self) -> Vec<CandleGeometry> {
        project_candles(&self.bars, &self.layout)
    }

    #[must_use]
    pub fn volume_geometry(&self) -> Vec<VolumeBarGeometry> {
        project_volume_bars(&self.bars, &self.layout)
    }

    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> PointerState {
        self.tracker.handle_event(event, &self.layout)
    }

    #[must_use]
    pub fn pointer_state(&self) -> PointerState {
        self.tracker.state()
    }

    /// Index and bar under the crosshair.
    #[must_use]
    pub fn hovered_bar(&self) -> Option<(usize, Bar)> {
        let index = self.tracker.state().hovered_index()?;
        self.bars.get(index).map(|bar| (index, *bar))
    }

    /// Builds the static layers plus the current crosshair overlay.
    #[must_use]
    pub fn build_frame(&self) -> RenderFrame {
        let mut frame = self.build_static_frame();
        self.append_crosshair_overlay(&mut frame);
        frame
    }

    /// Renders the current frame.
    ///
    /// Returns `Ok(false)` without touching the renderer while the host has
    /// not reported a usable width yet.
    pub fn render(&mut self) -> ChartResult<bool> {
        if !self.viewport().is_valid() {
            return Ok(false);
        }
        let frame = self.build_frame();
        self.renderer.render(&frame)?;
        Ok(true)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn refresh_layout(&mut self) {
        self.layout = CandleLayout::new(
            self.viewport(),
            self.config.padding,
            self.config.volume_height,
            &self.bars,
        );
    }
}
